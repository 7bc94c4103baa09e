use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DatasetStatusResponse {
    pub path: String,
    pub loaded: bool,
    /// 未加载时为 null
    pub rows: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CacheClearResponse {
    pub cleared: bool,
}
