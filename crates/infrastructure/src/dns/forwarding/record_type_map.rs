use hickory_proto::rr::RecordType as HickoryRecordType;
use zonediff_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }

    /// Convert hickory RecordType → domain RecordType (for zone entries)
    ///
    /// Every wire code maps; types without a domain mnemonic become
    /// `RecordType::Unknown`.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        RecordType::from_u16(u16::from(hickory_type))
    }
}
