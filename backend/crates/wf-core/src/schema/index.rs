use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDescriptor {
    pub name: String,
    pub columns: Vec<String>,
    pub unique: bool,
}

impl IndexDescriptor {
    pub fn unique(table_name: &str, columns: &[&str]) -> Self {
        Self {
            name: format!("IDX_{}_{}", table_name, columns.join("_")),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            unique: true,
        }
    }
}
