use std::path::Path;

use anyhow::{Context, bail};
use jiji_config::{Config, TagsConfig};
use jiji_core::error::BuildError;
use jiji_core::output::save_yaml;
use jiji_core::{
    Diagnostics, Dictionary, DictionaryMetadata, IdSource, RandomIds, SerializedDictionary,
    TagFile, TagFileError, Warning, apply_tag_file,
};
use jiji_lang_japanese::{EntryBuilder, JMdictLoader, JmdictRecord};

/// Counters reported at the end of a run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub records: usize,
    pub entries: usize,
    pub rejected: usize,
    pub skipped: usize,
    pub tag_files: usize,
    pub written: usize,
    pub warnings: usize,
}

/// Build and index one entry per record.
///
/// Rejected records are reported and dropped. Records contradicting
/// themselves abort the run unless `skip_malformed_records` is set.
pub fn build_dictionary<I: IdSource>(
    records: &[JmdictRecord],
    mut builder: EntryBuilder<I>,
    config: &Config,
    diagnostics: &mut Diagnostics,
    summary: &mut BuildSummary,
) -> anyhow::Result<Dictionary> {
    let mut dictionary = Dictionary::new(DictionaryMetadata::from(&config.dictionary));

    for record in records {
        summary.records += 1;
        match builder.build(record) {
            Ok(entry) => dictionary.add(entry),
            Err(BuildError::Rejected(rejection)) => {
                summary.rejected += 1;
                diagnostics.warn(Warning::RecordRejected(rejection));
            }
            Err(BuildError::Malformed(e)) if config.skip_malformed_records => {
                summary.skipped += 1;
                let entry = record.id.clone().unwrap_or_default().into();
                diagnostics.warn(Warning::RecordSkipped {
                    entry,
                    reason: e.to_string(),
                });
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!(
                        "cannot build record {}",
                        record.id.as_deref().unwrap_or("<no id>")
                    )
                });
            }
        }
    }

    summary.entries = dictionary.len();
    tracing::info!(
        "Built {} entries from {} records",
        dictionary.len(),
        records.len()
    );
    Ok(dictionary)
}

/// Read the configured tag files in declared order; missing files are reported and skipped
pub fn load_tag_files(
    tags: &TagsConfig,
    diagnostics: &mut Diagnostics,
) -> anyhow::Result<Vec<TagFile>> {
    let mut files = Vec::new();
    for (path, options) in tags.paths() {
        match TagFile::load(&path, options) {
            Ok(file) => files.push(file),
            Err(TagFileError::FileNotFound(path)) => {
                diagnostics.warn(Warning::MissingTagFile(path.display().to_string()));
            }
            Err(e) => {
                return Err(e).with_context(|| format!("cannot read tag file {}", path.display()));
            }
        }
    }
    Ok(files)
}

/// Apply every tag file, in order, once the dictionary is complete
pub fn apply_tag_files(
    dictionary: &mut Dictionary,
    tag_files: &[TagFile],
    diagnostics: &mut Diagnostics,
) -> anyhow::Result<()> {
    for tag_file in tag_files {
        apply_tag_file(dictionary, tag_file, diagnostics)
            .with_context(|| format!("cannot apply tag file {}", tag_file.name))?;
    }
    Ok(())
}

/// Records -> entries -> tags -> serialized mapping
pub fn run(
    records: &[JmdictRecord],
    config: &Config,
    diagnostics: &mut Diagnostics,
) -> anyhow::Result<(SerializedDictionary, BuildSummary)> {
    let mut summary = BuildSummary::default();

    let mut dictionary = if config.random_ids {
        let builder = EntryBuilder::with_ids(RandomIds);
        build_dictionary(records, builder, config, diagnostics, &mut summary)?
    } else {
        let builder = EntryBuilder::for_records(records);
        build_dictionary(records, builder, config, diagnostics, &mut summary)?
    };
    let tag_files = load_tag_files(&config.tags, diagnostics)?;
    summary.tag_files = tag_files.len();
    apply_tag_files(&mut dictionary, &tag_files, diagnostics)?;

    let serialized = dictionary.serialize(diagnostics);
    summary.written = serialized.entries.len();
    summary.warnings = diagnostics.len();
    Ok((serialized, summary))
}

/// Build the JMdict dictionary from a JSON export and write it as YAML
pub fn build_jmdict(records_path: &Path, lang: &str, config: &Config) -> anyhow::Result<BuildSummary> {
    let records = JMdictLoader::new(lang)
        .load_from_file(records_path)
        .with_context(|| format!("cannot load {}", records_path.display()))?;

    let mut diagnostics = Diagnostics::new();
    let (serialized, summary) = run(&records, config, &mut diagnostics)?;

    if serialized.entries.is_empty() {
        bail!("no entry to write, {} records were dropped", summary.rejected);
    }

    save_yaml(&serialized, &config.output)
        .with_context(|| format!("cannot write {}", config.output.display()))?;
    Ok(summary)
}
