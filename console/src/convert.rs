use std::fs::File;
use std::io::{
    stdin,
    stdout,
    BufReader,
    BufWriter,
    Write,
};
use std::path::PathBuf;

use clap::Args;
use console::style;
use flybase_gff::exports::anyhow::{
    self,
    Context,
};
use flybase_gff::exports::arcstr::ArcStr;
use flybase_gff::exports::log::info;
use flybase_gff::handler::{
    DEFAULT_DATA_SOURCE,
    DEFAULT_ID_PREFIX,
    DEFAULT_NAMESPACE,
};
use flybase_gff::prelude::*;
use itertools::Itertools;

use crate::utils::{
    init_spinner,
    UtilsArgs,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct ConvertArgs {
    #[arg(
        short,
        long,
        help = "Parsed GFF3 records, one JSON object per line. Reads stdin if \
                omitted."
    )]
    input:     Option<PathBuf>,
    #[arg(
        short,
        long,
        help = "Where to write items, one JSON object per line. Writes stdout \
                if omitted."
    )]
    output:    Option<PathBuf>,
    #[arg(long, default_value_t = DEFAULT_NAMESPACE.to_string(), help = "Target model namespace.")]
    namespace: String,
    #[arg(long, default_value_t = DEFAULT_DATA_SOURCE.to_string(), help = "Data source name synonyms are attributed to.")]
    source:    String,
    #[arg(long, default_value_t = DEFAULT_ID_PREFIX.to_string(), help = "Prefix of item identifiers.")]
    id_prefix: String,
}

impl ConvertArgs {
    fn config(&self) -> HandlerConfig {
        HandlerConfig::default()
            .with_namespace(ArcStr::from(self.namespace.as_str()))
            .with_data_source_name(ArcStr::from(self.source.as_str()))
            .with_id_prefix(ArcStr::from(self.id_prefix.as_str()))
    }

    pub fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()> {
        let input: Box<dyn std::io::BufRead> = match &self.input {
            Some(path) => {
                if !path.is_file() {
                    anyhow::bail!(
                        "Input {} is not a file",
                        style(path.display()).red()
                    );
                }
                Box::new(BufReader::new(File::open(path)?))
            },
            None => Box::new(BufReader::new(stdin())),
        };
        let output: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            )),
            None => Box::new(BufWriter::new(stdout())),
        };

        let mut handler = FlyBaseHandler::new(self.config());
        let mut writer = ItemWriter::new(output);
        let spinner = init_spinner(utils.no_progress || self.output.is_none())?;

        writer.write_item(handler.data_source())?;
        for record in RecordReader::new(input) {
            let record = record?;
            let out = handler.process(&record)?;
            writer.write_all(out.feature.iter().chain(out.items.iter()))?;
            spinner.inc(1);
        }
        spinner.set_message("Resolving genes...");
        let finals = handler.finalize();
        writer.write_all(&finals)?;
        spinner.finish_with_message("Done");

        let summary = finals
            .iter()
            .map(|item| item.class_fragment())
            .counts()
            .into_iter()
            .sorted()
            .map(|(class, count)| format!("{}: {}", class, count))
            .join(", ");
        info!("Final batch: {}", summary);
        info!("Wrote {} items", style(writer.finish()?).green());
        Ok(())
    }
}
