//! Document fixtures.

use anyhow::{Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A single file fetcher with every value kind set.
pub const FILE_FETCHER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<properties>
  <fetcher class="demo.FileFetcher">
    <params>
      <basePath>/srv/data</basePath>
      <spoolToTemp>TRUE</spoolToTemp>
      <maxBytes>10000000000</maxBytes>
      <retries>42</retries>
      <timeoutSeconds> 2.5 </timeoutSeconds>
      <backoff>1.5</backoff>
      <extensions>
        <ext>pdf</ext>
        <ext/>
        <ext>docx</ext>
        <ext>pdf</ext>
      </extensions>
      <metadata>
        <entry key="owner" value="ops"/>
        <entry from="tier" to="gold"/>
        <entry key="owner" value="platform"/>
      </metadata>
      <label>primary</label>
    </params>
  </fetcher>
</properties>
"#;

/// A composite of three fetchers plus parameters on the composite itself.
pub const COMPOSITE_FETCHER: &str = r#"<properties>
  <fetchers class="demo.CompositeFetcher">
    <fetcher class="demo.FileFetcher">
      <params><basePath>/a</basePath></params>
    </fetcher>
    <fetcher class="demo.BucketFetcher">
      <params><bucket>b</bucket><region>eu-west-1</region></params>
    </fetcher>
    <fetcher class="demo.FileFetcher">
      <params><basePath>/c</basePath><retries>3</retries></params>
    </fetcher>
    <params>
      <name>chain</name>
      <stopOnFirst>true</stopOnFirst>
    </params>
  </fetchers>
</properties>
"#;

/// A temporary document on disk, removed when dropped.
#[derive(Debug)]
pub struct DocumentFile {
    _dir: TempDir,
    path: Utf8PathBuf,
}

impl DocumentFile {
    /// Path of the written document.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

/// Writes `contents` to `config.xml` in a fresh temporary directory.
///
/// # Errors
///
/// Returns an error when the directory or file cannot be created, or the
/// temporary path is not valid UTF-8.
pub fn write_document(contents: &str) -> Result<DocumentFile> {
    let dir = tempfile::tempdir()?;
    let path = Utf8PathBuf::from_path_buf(dir.path().join("config.xml"))
        .map_err(|p| anyhow!("non UTF-8 temp path {}", p.display()))?;
    std::fs::write(&path, contents)?;
    Ok(DocumentFile { _dir: dir, path })
}
