use serde::{Deserialize, Serialize};

pub const SUCCESS_MESSAGE: &str = "跨域请求成功，已设置cookie！";

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DataResponse {
    pub message: String,
}
