use crate::error::CupnoteError;
use crate::ocr::OcrProvider;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

pub const DEFAULT_COMMAND: &str = "tesseract";
pub const DEFAULT_LANGUAGES: &str = "eng+kor";

/// Environment variable overriding the tesseract executable.
pub const COMMAND_ENV: &str = "CUPNOTE_TESSERACT_CMD";
/// Environment variable overriding the recognition languages.
pub const LANGUAGES_ENV: &str = "CUPNOTE_OCR_LANGS";

/// OCR backend using the `tesseract` command line tool.
///
/// Runs `tesseract <image> stdout -l <langs>`; Korean packaging needs the
/// `kor` traineddata installed next to `eng`.
#[derive(Debug, Clone)]
pub struct TesseractProvider {
    command: PathBuf,
    languages: String,
}

impl TesseractProvider {
    pub fn new() -> Self {
        TesseractProvider {
            command: PathBuf::from(DEFAULT_COMMAND),
            languages: DEFAULT_LANGUAGES.to_string(),
        }
    }

    /// Build a provider from `CUPNOTE_TESSERACT_CMD` / `CUPNOTE_OCR_LANGS`,
    /// falling back to the defaults for unset or blank variables.
    pub fn from_env() -> Self {
        let mut provider = Self::new();
        if let Some(cmd) = non_blank_env(COMMAND_ENV) {
            provider.command = PathBuf::from(cmd);
        }
        if let Some(langs) = non_blank_env(LANGUAGES_ENV) {
            provider.languages = langs;
        }
        provider
    }

    pub fn with_command(mut self, command: impl Into<PathBuf>) -> Self {
        self.command = command.into();
        self
    }

    pub fn with_languages(mut self, languages: impl Into<String>) -> Self {
        self.languages = languages.into();
        self
    }

    pub fn command(&self) -> &PathBuf {
        &self.command
    }

    pub fn languages(&self) -> &str {
        &self.languages
    }

    /// Check if the tesseract executable can be run.
    pub fn is_available(&self) -> bool {
        Command::new(&self.command)
            .arg("--version")
            .output()
            .map(|o| o.status.success() || !o.stdout.is_empty())
            .unwrap_or(false)
    }
}

impl Default for TesseractProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrProvider for TesseractProvider {
    fn extract_text(&self, image: &[u8]) -> Result<String, CupnoteError> {
        if image.is_empty() {
            return Err(CupnoteError::Ocr("image is empty".into()));
        }

        // tesseract reads from a path, so stage the bytes in a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| CupnoteError::Ocr(e.to_string()))?;
        tmpfile
            .write_all(image)
            .map_err(|e| CupnoteError::Ocr(e.to_string()))?;

        debug!(
            command = %self.command.display(),
            languages = %self.languages,
            bytes = image.len(),
            "running tesseract"
        );

        let output = Command::new(&self.command)
            .arg(tmpfile.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.languages)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    CupnoteError::TesseractNotFound
                } else {
                    CupnoteError::Ocr(format!("tesseract failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(CupnoteError::TesseractFailed { code, stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn backend_name(&self) -> &str {
        "tesseract"
    }
}

fn non_blank_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
