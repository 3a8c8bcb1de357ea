use serde::{Deserialize, Serialize};

/// Read model for a Buku row, enriched with the joined Penulis name.
/// `penulis_name` is derived by the LEFT JOIN and never persisted on Buku.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub name: Option<String>,
    #[serde(rename = "penulisId")]
    pub penulis_id: Option<i64>,
    #[serde(rename = "penulisName")]
    pub penulis_name: Option<String>,
}

/// Write model for create and partial update. Presence of a field, not its
/// value, decides whether the column is written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookInsert {
    pub name: Option<String>,
    #[serde(rename = "penulisId")]
    pub penulis_id: Option<i64>,
}

/// Bulk write payload: `{"data": [BookInsert, ...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookInsertMany {
    pub data: Vec<BookInsert>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub status: bool,
    pub msg: String,
}

/// Success envelope for read endpoints
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub status: bool,
    pub data: T,
}

/// Success envelope for write endpoints
#[derive(Debug, Serialize)]
pub struct ResultEnvelope<T> {
    pub status: bool,
    pub result: T,
}

/// Success envelope carrying no payload (delete acknowledgement)
#[derive(Debug, Serialize)]
pub struct StatusEnvelope {
    pub status: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_wire_field_names() {
        let book = Book {
            id: 1,
            name: Some("buku 1".to_string()),
            penulis_id: Some(7),
            penulis_name: Some("penulis 7".to_string()),
        };

        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["penulisId"], 7);
        assert_eq!(value["penulisName"], "penulis 7");
        assert!(value.get("penulis_id").is_none());
    }

    #[test]
    fn test_book_insert_absent_fields_stay_none() {
        let input: BookInsert = serde_json::from_str(r#"{"name": "only name"}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("only name"));
        assert!(input.penulis_id.is_none());

        let input: BookInsert = serde_json::from_str(r#"{"penulisId": 3}"#).unwrap();
        assert!(input.name.is_none());
        assert_eq!(input.penulis_id, Some(3));
    }
}
