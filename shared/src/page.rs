use serde::{Deserialize, Serialize};

/// Server-side pagination envelope returned by the paginated list
/// endpoints (`GET /author`, `GET /genre`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub current_page: u32,
    pub page_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_elements: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AuthorSummary;

    #[test]
    fn decodes_author_page() {
        let body = r#"{
            "content": [{"idAuthor": "a1", "name": "Tolkien"}],
            "currentPage": 0,
            "pageSize": 25
        }"#;

        let page: Page<AuthorSummary> = serde_json::from_str(body).unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].id_author, "a1");
        assert_eq!(page.content[0].name, "Tolkien");
        assert_eq!(page.current_page, 0);
        assert_eq!(page.page_size, 25);
        assert_eq!(page.total_elements, None);
    }
}
