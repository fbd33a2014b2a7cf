use crate::{
    error::{LlgError, Result},
    latex::LatexTables,
};
use derive_builder::Builder;
use std::{fs, path::PathBuf};
use tracing::info;

pub const PAYMENT_TABLE_FILE: &str = "LLG_shapley_table1.tex";
pub const IR_TABLE_FILE: &str = "LLG_shapley_table2.tex";

/// Destination of the two rendered tables
#[derive(Debug, Clone, Builder)]
pub struct TableWriter {
    #[builder(default = "PathBuf::from(\".\")", setter(into))]
    output_dir: PathBuf,
    #[builder(default = "PAYMENT_TABLE_FILE.to_string()", setter(into))]
    payment_table_file: String,
    #[builder(default = "IR_TABLE_FILE.to_string()", setter(into))]
    ir_table_file: String,
}

impl TableWriter {
    pub fn payment_table_path(&self) -> PathBuf {
        self.output_dir.join(&self.payment_table_file)
    }

    pub fn ir_table_path(&self) -> PathBuf {
        self.output_dir.join(&self.ir_table_file)
    }

    /// Write both tables, replacing existing files
    pub fn write(&self, tables: &LatexTables) -> Result<()> {
        write_file(self.payment_table_path(), &tables.payments)?;
        write_file(self.ir_table_path(), &tables.ir_constraints)?;
        Ok(())
    }
}

fn write_file(path: PathBuf, contents: &str) -> Result<()> {
    fs::write(&path, contents).map_err(|source| LlgError::Io {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), bytes = contents.len(), "wrote table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tables() -> LatexTables {
        LatexTables {
            payments: "payments".to_string(),
            ir_constraints: "ir".to_string(),
        }
    }

    #[test]
    fn test_builder_defaults() {
        let writer = TableWriterBuilder::default().build().unwrap();
        assert_eq!(
            writer.payment_table_path(),
            PathBuf::from(".").join(PAYMENT_TABLE_FILE)
        );
        assert_eq!(writer.ir_table_path(), PathBuf::from(".").join(IR_TABLE_FILE));
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let writer = TableWriterBuilder::default()
            .output_dir(dir.path())
            .build()
            .unwrap();

        fs::write(writer.payment_table_path(), "stale content that is longer").unwrap();
        writer.write(&sample_tables()).unwrap();

        assert_eq!(
            fs::read_to_string(writer.payment_table_path()).unwrap(),
            "payments"
        );
        assert_eq!(fs::read_to_string(writer.ir_table_path()).unwrap(), "ir");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let writer = TableWriterBuilder::default()
            .output_dir(dir.path().join("missing"))
            .build()
            .unwrap();

        let err = writer.write(&sample_tables()).unwrap_err();
        match err {
            LlgError::Io { path, .. } => assert_eq!(path, writer.payment_table_path()),
            other => panic!("unexpected error: {other}"),
        }
    }
}
