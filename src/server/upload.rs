use std::path::Path;

/// Reduces a client supplied file name to a safe base name, or `None` when
/// nothing usable is left.
pub fn sanitize_file_name(file_name: &str) -> Option<String> {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or_default();

    let cleaned: String = base
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.').to_string();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '_') {
        return None;
    }
    Some(cleaned)
}

pub async fn save_upload(upload_dir: &Path, file_name: &str, bytes: &[u8]) -> std::io::Result<()> {
    tokio::fs::create_dir_all(upload_dir).await?;
    tokio::fs::write(upload_dir.join(file_name), bytes).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_simple_names() {
        assert_eq!(sanitize_file_name("trout.jpg").as_deref(), Some("trout.jpg"));
        assert_eq!(sanitize_file_name("Sea_Bass-01.PNG").as_deref(), Some("Sea_Bass-01.PNG"));
    }

    #[test]
    fn test_sanitize_strips_directories() {
        assert_eq!(sanitize_file_name("../../etc/passwd").as_deref(), Some("passwd"));
        assert_eq!(sanitize_file_name("C:\\photos\\fish.jpg").as_deref(), Some("fish.jpg"));
        assert_eq!(sanitize_file_name(".hidden").as_deref(), Some("hidden"));
    }

    #[test]
    fn test_sanitize_replaces_odd_characters() {
        assert_eq!(sanitize_file_name("my fish (1).jpg").as_deref(), Some("my_fish__1_.jpg"));
    }

    #[test]
    fn test_sanitize_rejects_empty_names() {
        assert_eq!(sanitize_file_name(""), None);
        assert_eq!(sanitize_file_name(".."), None);
        assert_eq!(sanitize_file_name("dir/"), None);
        assert_eq!(sanitize_file_name("   "), None);
    }

    #[tokio::test]
    async fn test_save_upload_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let upload_dir = dir.path().join("uploads");

        save_upload(&upload_dir, "fish.jpg", b"bytes").await.unwrap();

        assert_eq!(std::fs::read(upload_dir.join("fish.jpg")).unwrap(), b"bytes");
    }
}
