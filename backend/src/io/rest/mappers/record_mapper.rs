use crate::domain::models::record::TransactionRecord as DomainRecord;
use shared::TransactionRecord as SharedRecord;

pub struct RecordMapper;

impl RecordMapper {
    pub fn to_dto(domain: DomainRecord) -> SharedRecord {
        SharedRecord {
            no: domain.no,
            player_name: domain.player_name,
            ball_count: domain.ball_count,
            actual_price: domain.actual_price,
            paid_price: domain.paid_price,
            difference: domain.difference,
            date: domain.date,
        }
    }
}
