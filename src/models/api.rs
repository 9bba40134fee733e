//! REST API 请求/响应模型

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 表单字段，顺序即提示词中的顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Topic,
    Context,
    Tone,
    Audience,
    Requirements,
}

impl FormField {
    /// 全部字段（固定顺序）
    pub const ALL: [FormField; 5] = [
        FormField::Topic,
        FormField::Context,
        FormField::Tone,
        FormField::Audience,
        FormField::Requirements,
    ];

    /// JSON 字段名，同时用作表单控件 id
    pub fn key(self) -> &'static str {
        match self {
            FormField::Topic => "topic",
            FormField::Context => "context",
            FormField::Tone => "tone",
            FormField::Audience => "audience",
            FormField::Requirements => "requirements",
        }
    }

    /// 按 JSON 字段名查找
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// 显示标签，同时用于提示词模板
    pub fn label(self) -> &'static str {
        match self {
            FormField::Topic => "Topic",
            FormField::Context => "Context",
            FormField::Tone => "Tone",
            FormField::Audience => "Target Audience",
            FormField::Requirements => "Special Requirements",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Topic => "What is the main topic or subject?",
            FormField::Context => "Provide background context or setting",
            FormField::Tone => {
                "What tone should the content have? (e.g., professional, casual, friendly)"
            }
            FormField::Audience => "Who is the intended audience?",
            FormField::Requirements => "Any specific requirements or constraints?",
        }
    }
}

/// 内容生成请求
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub requirements: String,
}

impl GenerationRequest {
    /// 读取字段值
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Topic => &self.topic,
            FormField::Context => &self.context,
            FormField::Tone => &self.tone,
            FormField::Audience => &self.audience,
            FormField::Requirements => &self.requirements,
        }
    }

    /// 更新单个字段，其余字段保持不变
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Topic => &mut self.topic,
            FormField::Context => &mut self.context,
            FormField::Tone => &mut self.tone,
            FormField::Audience => &mut self.audience,
            FormField::Requirements => &mut self.requirements,
        };
        *slot = value.into();
    }

    /// 所有字段去除空白后均非空
    pub fn is_complete(&self) -> bool {
        FormField::ALL
            .iter()
            .all(|&field| !self.value(field).trim().is_empty())
    }

    /// 从任意 JSON 值中提取请求
    ///
    /// 字段必须是非空字符串才算存在；返回 None 表示至少缺少一个字段。
    /// 与表单校验不同，这里不做 trim，纯空白字符串视为已填写。
    pub fn from_json_value(body: &Value) -> Option<Self> {
        let mut request = GenerationRequest::default();
        for field in FormField::ALL {
            let value = body
                .get(field.key())
                .and_then(Value::as_str)
                .filter(|v| !v.is_empty())?;
            request.set(field, value);
        }
        Some(request)
    }
}

/// 内容生成成功响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_body() -> Value {
        json!({
            "topic": "Cats",
            "context": "Pet care blog",
            "tone": "friendly",
            "audience": "new owners",
            "requirements": "under 200 words"
        })
    }

    #[test]
    fn test_from_json_value_complete() {
        let request = GenerationRequest::from_json_value(&full_body()).unwrap();
        assert_eq!(request.topic, "Cats");
        assert_eq!(request.requirements, "under 200 words");

        let mut body = full_body();
        body["topic"] = json!("   ");
        let request = GenerationRequest::from_json_value(&body).unwrap();
        assert_eq!(request.topic, "   ");
    }

    #[test]
    fn test_from_json_value_rejects_missing_or_empty() {
        for field in FormField::ALL {
            let mut body = full_body();
            body.as_object_mut().unwrap().remove(field.key());
            assert!(GenerationRequest::from_json_value(&body).is_none(), "{:?} missing", field);

            let mut body = full_body();
            body[field.key()] = json!("");
            assert!(GenerationRequest::from_json_value(&body).is_none(), "{:?} empty", field);

            let mut body = full_body();
            body[field.key()] = Value::Null;
            assert!(GenerationRequest::from_json_value(&body).is_none(), "{:?} null", field);
        }
    }

    #[test]
    fn test_from_json_value_non_object() {
        assert!(GenerationRequest::from_json_value(&json!(["Cats"])).is_none());
        assert!(GenerationRequest::from_json_value(&json!("Cats")).is_none());
    }

    #[test]
    fn test_is_complete_trims() {
        let mut request = GenerationRequest::from_json_value(&full_body()).unwrap();
        assert!(request.is_complete());
        request.set(FormField::Tone, "   ");
        assert!(!request.is_complete());
    }

    #[test]
    fn test_field_keys_round_trip() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_key(field.key()), Some(field));
        }
        assert_eq!(FormField::from_key("Topic"), None);
    }

    #[test]
    fn test_set_updates_single_field() {
        let mut request = GenerationRequest::default();
        request.set(FormField::Audience, "new owners");
        assert_eq!(request.value(FormField::Audience), "new owners");
        assert_eq!(request.value(FormField::Topic), "");
    }
}
