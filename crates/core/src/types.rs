/// Film ids are positive integers assigned by the service layer.
pub type RecordId = i64;

/// Running time in whole minutes.
pub type Minutes = u32;
