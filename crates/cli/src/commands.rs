use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    /// Run every job of a job file, or the built-in jobs when none is given
    Run {
        #[arg(long, help = "JSON job file path")]
        config: Option<String>,

        #[arg(long, help = "Print the per-job summary as JSON instead of a table")]
        json: bool,
    },
    /// Sample a single file
    Sample {
        #[arg(short, long, help = "File to sample")]
        input: String,

        #[arg(
            short,
            long,
            help = "Where to write the sample; the input is overwritten when omitted"
        )]
        output: Option<String>,

        #[arg(short = 'n', long, allow_negative_numbers = true, help = "Number of rows to keep")]
        size: i64,

        #[arg(long, default_value_t = engine_config::settings::DEFAULT_SEED)]
        seed: u64,

        #[arg(long, default_value = "utf-8", help = "Encoding of the output file")]
        output_encoding: String,

        #[arg(long, help = "Drop rows whose field count differs from the header")]
        skip_ragged: bool,

        #[arg(long, help = "Write the source row index as a leading unnamed column")]
        row_index: bool,

        #[command(flatten)]
        format: FormatArgs,
    },
    /// Print the row count and inferred column types of a file as JSON
    Inspect {
        #[arg(short, long)]
        input: String,

        #[command(flatten)]
        format: FormatArgs,
    },
    /// Print the validated job list as JSON
    Config {
        #[arg(long, help = "JSON job file path")]
        config: Option<String>,
    },
}

/// How to read the input file.
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    #[arg(long, default_value = "utf-8", help = "Encoding of the input file")]
    pub encoding: String,

    #[arg(long, help = "The first line is data, not a header")]
    pub no_header: bool,

    #[arg(long, default_value = ",", help = "Field delimiter (use \\t for tab)")]
    pub delimiter: String,
}
