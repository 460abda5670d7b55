use crate::error::Error;
use indexmap::IndexMap;
use serde::Serialize;

/// Most labels a single source file may define.
pub const MAX_LABELS: usize = 1024;
/// Label names are shorter than this.
pub const MAX_LABEL_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    pub address: usize,
    /// 1-based source line of the definition.
    pub line: usize,
}

/// Symbol table: label name -> word address, in definition order.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Labels {
    labels: IndexMap<String, Label>,
}

impl Labels {
    pub fn new() -> Self {
        Labels {
            labels: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, name: &str, address: usize, line: usize) -> Result<(), Error> {
        if !is_valid_name(name) {
            return Err(Error::InvalidLabel(name.to_string()));
        }
        if let Some(prev) = self.labels.get(name) {
            return Err(Error::DuplicateLabel(name.to_string(), prev.line));
        }
        if self.labels.len() >= MAX_LABELS {
            return Err(Error::LabelTableFull(name.to_string(), MAX_LABELS));
        }
        self.labels.insert(name.to_string(), Label { address, line });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Label> {
        self.labels.get(name)
    }

    pub fn lookup(&self, name: &str) -> Result<usize, Error> {
        self.labels
            .get(name)
            .map(|label| label.address)
            .ok_or_else(|| Error::UnknownLabel(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Label)> {
        self.labels.iter().map(|(name, label)| (name.as_str(), label))
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() < MAX_LABEL_LEN
        && !name.chars().any(|c| c.is_whitespace() || c == ',' || c == ':')
}
