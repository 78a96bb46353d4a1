//! The engine facade: validates a report, runs the selected builder and
//! hands the node tree to the serializer.

use crate::config::EngineConfig;
use crate::error::BuildError;
use crate::filename::report_filename;
use crate::logos::LogoRegistry;
use crate::render::{BuildStats, RenderContext};
use crate::{replica, template};
use eventdoc_extract::{AttachmentTextExtractor, DocxTextExtractor};
use eventdoc_idf::{DocumentMetadata, DocumentTree};
use eventdoc_model::{ContentBlock, EventReport};
use eventdoc_render_docx::DocxSerializer;
use eventdoc_resource::{BinaryResourceLoader, InMemoryFetcher, RemoteFetcher};
use eventdoc_traits::{DocumentSerializer, FileSaver, WordTextExtractor};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Which builder lays the document out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RenderMode {
    #[default]
    Template,
    Replica,
}

/// Whether content blocks are rendered (`Full`) or only the narrative (`Summary`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKind {
    #[default]
    Full,
    Summary,
}

/// A serialized document and what went into it.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDocument {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub stats: BuildStats,
}

/// Builds report documents. Holds only immutable collaborators, so one
/// engine can serve concurrent builds.
#[derive(Debug, Clone)]
pub struct ReportEngine {
    config: EngineConfig,
    logos: LogoRegistry,
    loader: BinaryResourceLoader,
    extractor: AttachmentTextExtractor,
    serializer: Arc<dyn DocumentSerializer>,
}

impl ReportEngine {
    pub fn builder() -> ReportEngineBuilder {
        ReportEngineBuilder::new()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn logos(&self) -> &LogoRegistry {
        &self.logos
    }

    /// Lays `report` out as a node tree without serializing it.
    pub async fn build_tree(
        &self,
        report: &EventReport,
        mode: RenderMode,
        kind: DocumentKind,
    ) -> Result<(DocumentTree, BuildStats), BuildError> {
        report.validate()?;

        let blocks: &[ContentBlock] = match kind {
            DocumentKind::Full => &report.blocks,
            DocumentKind::Summary => &[],
        };
        let policy = match mode {
            RenderMode::Template => &self.config.template_style,
            RenderMode::Replica => &self.config.replica_style,
        };
        log::info!(
            "Building {:?} {:?} document for '{}' ({} block(s))",
            kind,
            mode,
            report.title,
            blocks.len()
        );

        let mut ctx = RenderContext {
            loader: &self.loader,
            extractor: &self.extractor,
            config: &self.config,
            policy,
            logos: &self.logos,
            stats: BuildStats::default(),
        };
        let body = match mode {
            RenderMode::Template => template::build(&mut ctx, report, blocks).await,
            RenderMode::Replica => replica::build(&mut ctx, report, blocks).await,
        };
        let stats = ctx.stats;

        let tree = DocumentTree {
            page: self.config.page,
            default_font: policy.font.clone(),
            default_size: policy.body_size,
            metadata: DocumentMetadata {
                title: report.title.trim().to_string(),
                creator: self.config.creator.clone(),
                subject: report.tagline.clone().filter(|t| !t.trim().is_empty()),
            },
            body,
        };
        log::info!(
            "Built '{}': {} node(s), {} block(s), {} image(s), {} placeholder(s)",
            report.title,
            tree.node_count(),
            stats.blocks,
            stats.images,
            stats.placeholders
        );
        Ok((tree, stats))
    }

    /// Builds and serializes `report`.
    pub async fn generate(
        &self,
        report: &EventReport,
        mode: RenderMode,
        kind: DocumentKind,
    ) -> Result<GeneratedDocument, BuildError> {
        let (tree, stats) = self.build_tree(report, mode, kind).await?;
        let bytes = self.serializer.serialize(&tree)?;
        Ok(GeneratedDocument {
            bytes,
            filename: report_filename(&report.title, kind),
            stats,
        })
    }

    /// Builds, serializes and hands the result to `saver`. Returns the
    /// location the saver reports.
    pub async fn generate_and_save(
        &self,
        report: &EventReport,
        mode: RenderMode,
        kind: DocumentKind,
        saver: &dyn FileSaver,
    ) -> Result<String, BuildError> {
        let document = self.generate(report, mode, kind).await?;
        let location = saver.save(&document.bytes, &document.filename).await?;
        log::info!("Saved '{}' to {}", document.filename, location);
        Ok(location)
    }
}

/// A builder for creating a [`ReportEngine`].
#[derive(Default)]
pub struct ReportEngineBuilder {
    config: Option<EngineConfig>,
    logos: Option<LogoRegistry>,
    fetcher: Option<Arc<dyn RemoteFetcher>>,
    word: Option<Arc<dyn WordTextExtractor>>,
    serializer: Option<Arc<dyn DocumentSerializer>>,
}

impl ReportEngineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_logo_registry(mut self, logos: LogoRegistry) -> Self {
        self.logos = Some(logos);
        self
    }

    /// Sets the collaborator used for every non-embedded reference.
    pub fn with_fetcher(mut self, fetcher: Arc<dyn RemoteFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    pub fn with_word_extractor(mut self, word: Arc<dyn WordTextExtractor>) -> Self {
        self.word = Some(word);
        self
    }

    pub fn with_serializer(mut self, serializer: Arc<dyn DocumentSerializer>) -> Self {
        self.serializer = Some(serializer);
        self
    }

    pub fn build(self) -> ReportEngine {
        let fetcher: Arc<dyn RemoteFetcher> = match self.fetcher {
            Some(fetcher) => fetcher,
            None => {
                log::info!("No fetcher configured; remote references will not resolve");
                Arc::new(InMemoryFetcher::new())
            }
        };
        let word: Arc<dyn WordTextExtractor> = match self.word {
            Some(word) => word,
            None => Arc::new(DocxTextExtractor::new()),
        };
        let serializer: Arc<dyn DocumentSerializer> = match self.serializer {
            Some(serializer) => serializer,
            None => Arc::new(DocxSerializer::default()),
        };
        log::info!(
            "Using fetcher '{}' and '.{}' serializer",
            fetcher.name(),
            serializer.extension()
        );

        ReportEngine {
            config: self.config.unwrap_or_default(),
            logos: self.logos.unwrap_or_default(),
            loader: BinaryResourceLoader::new(fetcher),
            extractor: AttachmentTextExtractor::new(word),
            serializer,
        }
    }
}
