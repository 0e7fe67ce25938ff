use chrono::Utc;


// 2024-10-13
pub fn current_date_string() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
