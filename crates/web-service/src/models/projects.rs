use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// 名称字段的最大长度，与数据库 `VARCHAR(255)` 保持一致
pub const MAX_NAME_LENGTH: usize = 255;

/// 创建/更新项目的请求参数
///
/// 字段缺失或为 `null` 时等同于空字符串，由校验统一报错
#[derive(Deserialize, Debug, Clone, ToSchema, Validate)]
pub struct ProjectPayload {
    #[schema(example = "Project Alpha")]
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        length(min = 1, message = "Name is required at least 1 character"),
        custom(function = "validate_name_length")
    )]
    /// 项目名称
    pub name: String,

    #[schema(example = "A React project.")]
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Description is required at least 1 character"))]
    /// 项目描述
    pub description: String,
}

impl ProjectPayload {
    /// 去掉首尾空白，只有空白的字段会在校验时被拒绝
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn validate_name_length(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() > MAX_NAME_LENGTH {
        let mut err = ValidationError::new("length");
        err.message = Some(format!("Name must be at most {MAX_NAME_LENGTH} characters").into());
        return Err(err);
    }
    Ok(())
}
