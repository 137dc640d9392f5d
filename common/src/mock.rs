//! テスト用のインメモリバックエンド

use std::cell::RefCell;

use async_trait::async_trait;

use crate::backend::{ImageBackend, ImageSource};
use crate::error::{Error, Result};
use crate::types::{ImageRecord, NewImageRecord};

pub struct MockFile {
    name: String,
    mime: String,
}

impl MockFile {
    pub fn new(name: &str, mime: &str) -> Self {
        Self {
            name: name.to_string(),
            mime: mime.to_string(),
        }
    }
}

impl ImageSource for MockFile {
    fn file_name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Upload(String),
    Insert(NewImageRecord),
    List,
}

#[derive(Default)]
pub struct MockBackend {
    configured: bool,
    fail_upload_of: Vec<String>,
    fail_inserts: bool,
    fail_list: bool,
    records: Vec<ImageRecord>,
    calls: RefCell<Vec<Call>>,
}

impl MockBackend {
    pub fn configured() -> Self {
        Self {
            configured: true,
            ..Default::default()
        }
    }

    pub fn unconfigured() -> Self {
        Self::default()
    }

    pub fn fail_upload_of(mut self, object_name: &str) -> Self {
        self.fail_upload_of.push(object_name.to_string());
        self
    }

    pub fn fail_inserts(mut self) -> Self {
        self.fail_inserts = true;
        self
    }

    pub fn fail_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn with_records(mut self, records: Vec<ImageRecord>) -> Self {
        self.records = records;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ImageBackend for MockBackend {
    type Payload = MockFile;

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn upload_object(&self, object_name: &str, _payload: &MockFile) -> Result<()> {
        self.calls.borrow_mut().push(Call::Upload(object_name.to_string()));
        if self.fail_upload_of.iter().any(|n| n == object_name) {
            return Err(Error::Storage("mock storage failure".to_string()));
        }
        Ok(())
    }

    fn public_url(&self, object_name: &str) -> String {
        format!("https://mock/public/{}", object_name)
    }

    async fn insert_record(&self, record: &NewImageRecord) -> Result<()> {
        self.calls.borrow_mut().push(Call::Insert(record.clone()));
        if self.fail_inserts {
            return Err(Error::Database("mock insert failure".to_string()));
        }
        Ok(())
    }

    async fn list_records(&self) -> Result<Vec<ImageRecord>> {
        self.calls.borrow_mut().push(Call::List);
        if self.fail_list {
            return Err(Error::Network("mock network failure".to_string()));
        }
        Ok(self.records.clone())
    }
}
