use crate::domain::commands::dashboard::DashboardPage;
use crate::domain::currency::format_rupiah;
use crate::domain::RecordTableService;
use shared::DashboardResponse;

pub struct DashboardMapper;

impl DashboardMapper {
    pub fn to_dto(page: DashboardPage, table: &RecordTableService) -> DashboardResponse {
        DashboardResponse {
            records: table.format_records(&page.records),
            page: page.page as u32,
            total_pages: page.total_pages as u32,
            page_size: page.page_size as u32,
            filtered_count: page.filtered_count,
            total_count: page.total_count,
            filtered_total: page.filtered_total,
            today_total: page.today_total,
            all_time_total: page.all_time_total,
            formatted_filtered_total: format_rupiah(page.filtered_total),
            formatted_today_total: format_rupiah(page.today_total),
            formatted_all_time_total: format_rupiah(page.all_time_total),
            range_label: table.range_label(&page.range),
        }
    }
}
