use serde::Deserialize;

/// 页面查询参数：?company=TCS&raw=true
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub company: Option<String>,
    pub raw: Option<bool>,
}
