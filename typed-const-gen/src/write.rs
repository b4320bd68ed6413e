/// File-system entry point: validate, create the parent directory, render,
/// overwrite the target.
use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::emit_ts::render_file;
use crate::error::WriteError;
use crate::options::WriteOptions;

/// Generate a TypeScript file exporting a typed constant, enum, or union
/// type.
///
/// The target is overwritten in full. Concurrent calls for the same path
/// are not coordinated; the last write wins.
pub async fn write_typed_variable_to_file(opts: &WriteOptions) -> Result<(), WriteError> {
    opts.validate()?;

    ensure_parent_dir(&opts.output_path).await?;

    let content = render_file(opts, None);
    fs::write(&opts.output_path, content.as_bytes())
        .await
        .map_err(|source| WriteError::Write {
            path: opts.output_path.clone(),
            source,
        })?;
    debug!(
        path = %opts.output_path.display(),
        bytes = content.len(),
        format = opts.type_format.as_str(),
        "wrote generated file"
    );
    Ok(())
}

async fn ensure_parent_dir(path: &Path) -> Result<(), WriteError> {
    let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) else {
        return Ok(());
    };
    debug!(dir = %dir.display(), "ensuring output directory");
    fs::create_dir_all(dir)
        .await
        .map_err(|source| WriteError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_invalid_name_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.ts");
        let opts = WriteOptions::new("T", json!(1), "bad name", &path);
        let err = write_typed_variable_to_file(&opts).await.unwrap_err();
        assert!(matches!(err, WriteError::InvalidArgument(_)));
        assert!(!path.exists());
        assert!(!dir.path().join("nested").exists());
    }

    #[tokio::test]
    async fn test_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let opts = WriteOptions::new("T", json!(1), "X", blocker.join("out.ts"));
        let err = write_typed_variable_to_file(&opts).await.unwrap_err();
        assert!(err.is_filesystem());
    }

    #[tokio::test]
    async fn test_target_is_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let opts = WriteOptions::new("T", json!(1), "X", dir.path());
        let err = write_typed_variable_to_file(&opts).await.unwrap_err();
        assert!(matches!(err, WriteError::Write { .. }));
    }
}
