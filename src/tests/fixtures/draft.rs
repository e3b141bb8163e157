// Shared test fixture for the appointment form Draft.

use crate::modules::appointments::use_cases::submit_appointment::draft::Draft;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (form shape)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftDto {
    pub date: String,
    pub client_name: String,
    pub pet_name: String,
    pub price: String,
    pub comment: String,
}

pub struct DraftBuilder {
    inner: Draft,
}

impl Default for DraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl DraftBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/tests/fixtures/json/draft.json").unwrap();
        let dto: DraftDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: Draft {
                date: dto.date,
                client_name: dto.client_name,
                pet_name: dto.pet_name,
                price: dto.price,
                comment: dto.comment,
            },
        }
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = v.into();
        self
    }

    pub fn client_name(mut self, v: impl Into<String>) -> Self {
        self.inner.client_name = v.into();
        self
    }

    pub fn pet_name(mut self, v: impl Into<String>) -> Self {
        self.inner.pet_name = v.into();
        self
    }

    pub fn price(mut self, v: impl Into<String>) -> Self {
        self.inner.price = v.into();
        self
    }

    pub fn comment(mut self, v: impl Into<String>) -> Self {
        self.inner.comment = v.into();
        self
    }

    pub fn build(self) -> Draft {
        self.inner
    }
}
