use anyhow::{Result, anyhow};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::{Config, TranslationMode};
use crate::dictionary::Dictionary;
use crate::document_processor::SourceDocument;
use crate::docx;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::providers::RemoteTranslator;
use crate::providers::google::GoogleTranslate;
use crate::translation::{BlockRenderer, DocumentAssembler, OutputDocument, Segmenter, SentenceStrategy};

// @module: Application controller for document translation

/// Main application controller: one input document per run
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // @loads: Dictionary from the configured path, empty on failure
    pub fn load_dictionary(&self) -> Dictionary {
        Dictionary::load_or_empty(&self.config.dictionary_path)
    }

    // @creates: Segmenter honoring the configured window and separator
    pub fn build_segmenter<'a>(&self, dictionary: &'a Dictionary) -> Segmenter<'a> {
        let segmenter = Segmenter::new(dictionary)
            .with_separator(self.config.translation.sentence_separator.clone());
        match self.config.translation.max_token_length {
            Some(window) => segmenter.with_window(window),
            None => segmenter,
        }
    }

    /// Where the output document goes when no explicit path is given
    pub fn resolve_output_path(&self, input_file: &Path, output: Option<PathBuf>) -> PathBuf {
        output.unwrap_or_else(|| FileManager::generate_output_path(input_file, &self.config.output.file_name))
    }

    /// Read and decode the input document
    pub fn read_source(&self, input_file: &Path) -> Result<SourceDocument, AppError> {
        if !FileManager::file_exists(input_file) {
            return Err(AppError::File(format!("Input file does not exist: {:?}", input_file)));
        }
        Ok(SourceDocument::read(input_file)?)
    }

    /// Run the whole workflow.
    ///
    /// Returns the written path, or `None` when an existing output was kept.
    pub async fn run(&self, input_file: PathBuf, output: Option<PathBuf>, force_overwrite: bool) -> Result<Option<PathBuf>> {
        match self.config.translation.mode {
            TranslationMode::Dictionary => self.run_with_translator(input_file, output, force_overwrite, None).await,
            TranslationMode::Remote => {
                let google = GoogleTranslate::from_config(&self.config.translation.remote);
                debug!("Using remote endpoint {}", google.endpoint());
                self.run_with_translator(input_file, output, force_overwrite, Some(&google)).await
            }
        }
    }

    /// Run the workflow with a caller-supplied remote translator
    pub async fn run_with_translator(
        &self,
        input_file: PathBuf,
        output: Option<PathBuf>,
        force_overwrite: bool,
        translator: Option<&dyn RemoteTranslator>,
    ) -> Result<Option<PathBuf>> {
        let start_time = Instant::now();

        let output_path = self.resolve_output_path(&input_file, output);
        if output_path.exists() && !force_overwrite {
            warn!("Skipping file, {:?} already exists (use -f to force overwrite)", output_path);
            return Ok(None);
        }

        let dictionary = self.load_dictionary();
        let source = self.read_source(&input_file)?;
        info!("Reading {:?} ({})", input_file, source.format);
        self.log_detected_language(&source.text);

        let lines = source.lines();
        let document = self.translate_lines(&lines, &dictionary, translator).await?;
        self.write_document(&document, &output_path)?;

        let failed = document.failed_count();
        if failed > 0 {
            warn!("{} of {} lines have no remote translation", failed, document.len());
        }
        info!(
            "Wrote {} lines to {} in {}",
            document.len(),
            output_path.display(),
            Self::format_duration(start_time.elapsed())
        );

        Ok(Some(output_path))
    }

    /// Assemble the bilingual document for already split lines
    pub async fn translate_lines(
        &self,
        lines: &[String],
        dictionary: &Dictionary,
        translator: Option<&dyn RemoteTranslator>,
    ) -> Result<OutputDocument> {
        let strategy = match (self.config.translation.mode, translator) {
            (TranslationMode::Dictionary, _) => SentenceStrategy::Dictionary,
            (TranslationMode::Remote, Some(translator)) => SentenceStrategy::Remote(translator),
            (TranslationMode::Remote, None) => {
                return Err(anyhow!("Remote mode requires a remote translator"));
            }
        };
        info!(
            "Translating {} lines ({} mode, {} dictionary entries)",
            lines.len(),
            self.config.translation.mode.display_name(),
            dictionary.len()
        );

        let progress_bar = ProgressBar::new(lines.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines ({percent}%) {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%)"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("█▓▒░"));

        let assembler = DocumentAssembler::new(self.build_segmenter(dictionary), strategy);
        let document = assembler
            .assemble_with_progress(lines, |done, _| progress_bar.set_position(done as u64))
            .await;
        progress_bar.finish_and_clear();

        Ok(document)
    }

    /// Render the document and write it atomically as a .docx
    pub fn write_document(&self, document: &OutputDocument, output_path: &Path) -> Result<()> {
        let paragraphs = BlockRenderer::new(&self.config.output).render_document(document);
        FileManager::write_atomic(output_path, |writer| {
            docx::write_docx(&paragraphs, writer)?;
            Ok(())
        })
    }

    fn log_detected_language(&self, text: &str) {
        match language_utils::detect_language(text) {
            Some(code) => {
                let name = language_utils::get_language_name(code).unwrap_or_else(|_| code.to_string());
                info!("Detected language: {} ({})", name, code);
                if !language_utils::language_codes_match(code, &self.config.source_language) {
                    warn!(
                        "Document looks like {} but the source language is {}",
                        name, self.config.source_language
                    );
                }
            }
            None => warn!("Could not detect the document language"),
        }
    }

    // Format duration in a human-readable format
    fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
