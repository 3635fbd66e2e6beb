use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use tracing::debug;
use zonediff_domain::{DomainError, NormalizedAnswer, QueryKey};

/// Turns a decoded response into the comparable form of one record-set.
///
/// Only three response shapes are recognised: a NOERROR answer, a NOERROR
/// NS referral carried in the authority section, and an empty NOERROR.
/// Everything else is reported as an error instead of being read as "no
/// data", so a broken server never shows up as a content difference.
pub struct AnswerExtractor;

impl AnswerExtractor {
    pub fn extract(
        message: &Message,
        server_name: &str,
        key: &QueryKey,
        ignore_ttl: bool,
    ) -> Result<Option<NormalizedAnswer>, DomainError> {
        let rcode = message.response_code();

        if rcode != ResponseCode::NoError {
            return Err(DomainError::UnexpectedResponse {
                server: server_name.to_string(),
                name: key.name.to_string(),
                record_type: key.record_type.to_string(),
                rcode: Self::rcode_to_status(rcode).to_string(),
            });
        }

        let answers = Self::first_record_set(message.answers());
        if !answers.is_empty() {
            return Ok(Some(Self::normalize(&answers, ignore_ttl)));
        }

        if key.record_type.is_delegation() {
            let authority = Self::first_record_set(message.name_servers());
            if !authority.is_empty() && !Self::names_server(&authority, server_name) {
                debug!(
                    server = server_name,
                    name = %key.name,
                    "NS answer taken from authority section"
                );
                return Ok(Some(Self::normalize(&authority, ignore_ttl)));
            }
        }

        Ok(None)
    }

    /// Records sharing the name, class and type of the section's first record.
    fn first_record_set(section: &[Record]) -> Vec<&Record> {
        let Some(first) = section.first() else {
            return Vec::new();
        };

        section
            .iter()
            .filter(|r| {
                r.name() == first.name()
                    && r.record_type() == first.record_type()
                    && r.dns_class() == first.dns_class()
            })
            .collect()
    }

    /// True when the record-set lists `server_name` as one of its NS targets.
    fn names_server(records: &[&Record], server_name: &str) -> bool {
        let wanted = server_name.trim_end_matches('.');

        records.iter().any(|record| match record.data() {
            RData::NS(ns) => ns
                .0
                .to_utf8()
                .trim_end_matches('.')
                .eq_ignore_ascii_case(wanted),
            _ => false,
        })
    }

    fn normalize(records: &[&Record], ignore_ttl: bool) -> NormalizedAnswer {
        NormalizedAnswer::from_lines(records.iter().map(|record| {
            if ignore_ttl {
                let mut record = (*record).clone();
                record.set_ttl(0);
                record.to_string()
            } else {
                record.to_string()
            }
        }))
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
