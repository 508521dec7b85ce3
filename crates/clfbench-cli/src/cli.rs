use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, ValueHint};

/// Argument definitions for the `clfbench` binary.
pub fn build_cli() -> Command {
    Command::new("clfbench")
        .version(clap::crate_version!())
        .author("clfbench developers")
        .about("\u{1F4CA} clfbench - compare binary classifiers on a held-out split")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Fit every configured model and report accuracy and ROC AUC")
                .arg(
                    Arg::new("config")
                        .help("Path to an experiment JSON configuration file")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("data")
                        .short('d')
                        .long("data")
                        .help(
                            "Path to the headerless data table. \
                             Overrides the data path specified in the configuration file.",
                        )
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("seed")
                        .short('s')
                        .long("seed")
                        .help("Seed for the train/test permutation and model initialisation.")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("test_size")
                        .short('t')
                        .long("test-size")
                        .help("Fraction of rows held out for testing, in (0, 1).")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("model")
                        .short('m')
                        .long("model")
                        .help(
                            "Model to run; repeat to run several in order. \
                             Replaces the model list from the configuration file.",
                        )
                        .value_parser(["gbdt", "mlp", "logistic"])
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help("Report format written to stdout.")
                        .value_parser(["text", "json"])
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("scale_features")
                        .long("scale-features")
                        .help("Standardize features with statistics from the training rows.")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("auc_from_scores")
                        .long("auc-from-scores")
                        .help("Compute ROC AUC from raw model scores instead of rounded labels.")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("roc_plot")
                        .long("roc-plot")
                        .help("Write an HTML ROC plot of every model to this file.")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("config").about("Print the default experiment configuration as JSON"),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Written by {author-with-newline}Version {version}\n\n\
             {all-args}{after-help}",
        )
}
