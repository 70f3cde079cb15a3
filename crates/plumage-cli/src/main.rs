use plumage_core::{EdgeRow, GraphModel, NodeTable, Session, StyleControls, StyleEngine, TapEvent};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Plumage(plumage_core::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Plumage(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<plumage_core::Error> for CliError {
    fn from(value: plumage_core::Error) -> Self {
        Self::Plumage(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Stylesheet,
    Inspect,
    Attributes,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    controls: Option<String>,
    pretty: bool,
    seed: Option<u64>,
    out: Option<String>,
}

/// The input document: tables, control overrides and the taps to replay, in order.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Document {
    nodes: NodeTable,
    edges: Vec<EdgeRow>,
    controls: Map<String, Value>,
    taps: Vec<Tap>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Tap {
    Node(Value),
    Edge(Value),
}

impl Tap {
    fn into_event(self) -> plumage_core::Result<TapEvent> {
        match self {
            Tap::Node(payload) => TapEvent::from_node_payload(payload),
            Tap::Edge(payload) => TapEvent::from_edge_payload(payload),
        }
    }
}

#[derive(Serialize)]
struct AttributesOut<'a> {
    numeric: &'a [String],
    categorical: &'a [String],
    sizing_options: Vec<&'a str>,
    coloring_options: Vec<&'a str>,
}

fn usage() -> &'static str {
    "plumage-cli\n\
\n\
USAGE:\n\
  plumage-cli [stylesheet] [--pretty] [--controls <path>] [--seed <n>] [--out <path>] [<path>|-]\n\
  plumage-cli inspect [--seed <n>] [--out <path>] [<path>|-]\n\
  plumage-cli attributes [--pretty] [<path>|-]\n\
\n\
INPUT:\n\
  A JSON document {\"nodes\": [...], \"edges\": [...], \"controls\": {...}, \"taps\": [...]}.\n\
  Node rows carry an `ID` column, edge rows `Source`, `Target` and optionally `Weight`.\n\
  Each tap is {\"node\": {\"id\": ...}} or {\"edge\": {\"source\": ..., \"target\": ...}}.\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - --controls merges a separate control file over the document's controls.\n\
  - --seed makes weights drawn for edges without a `Weight` reproducible.\n\
  - Set RUST_LOG=debug to trace pipeline stages on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "stylesheet" => args.command = Command::Stylesheet,
            "inspect" => args.command = Command::Inspect,
            "attributes" => args.command = Command::Attributes,
            "--pretty" => args.pretty = true,
            "--controls" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.controls = Some(path.clone());
            }
            "--seed" => {
                let Some(seed) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.seed = Some(seed.parse::<u64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--out" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(path.clone());
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn to_json(value: &impl Serialize, pretty: bool) -> Result<String, CliError> {
    let mut text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    text.push('\n');
    Ok(text)
}

fn load_model(
    nodes: NodeTable,
    edges: Vec<EdgeRow>,
    seed: Option<u64>,
) -> Result<GraphModel, CliError> {
    let model = match seed {
        Some(seed) => {
            GraphModel::from_tables_with_rng(nodes, edges, &mut StdRng::seed_from_u64(seed))?
        }
        None => GraphModel::from_tables(nodes, edges)?,
    };
    Ok(model)
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let doc: Document = serde_json::from_str(&text)?;

    let mut controls = StyleControls::from_value(Value::Object(doc.controls));
    if let Some(path) = args.controls.as_deref() {
        let extra: Map<String, Value> = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        controls.deep_merge(&Value::Object(extra));
    }

    let taps = doc
        .taps
        .into_iter()
        .map(Tap::into_event)
        .collect::<plumage_core::Result<Vec<_>>>()?;

    let engine = StyleEngine::new(load_model(doc.nodes, doc.edges, args.seed)?);
    tracing::debug!(
        nodes = engine.model().node_count(),
        edges = engine.model().edge_count(),
        taps = taps.len(),
        "loaded input document"
    );

    match args.command {
        Command::Attributes => {
            let columns = engine.columns();
            let out = AttributesOut {
                numeric: &columns.numeric,
                categorical: &columns.categorical,
                sizing_options: columns.sizing_options(),
                coloring_options: columns.coloring_options(),
            };
            write_text(&to_json(&out, args.pretty)?, args.out.as_deref())
        }
        Command::Stylesheet | Command::Inspect => {
            let mut session = Session::new();
            let mut last = None;
            for tap in taps {
                let output = engine.run(session, &controls, Some(tap));
                session = output.session.clone();
                last = Some(output);
            }
            let output = match last {
                Some(output) => output,
                None => engine.run(session, &controls, None),
            };

            match args.command {
                Command::Inspect => {
                    let mut report = output.report;
                    if !report.ends_with('\n') {
                        report.push('\n');
                    }
                    write_text(&report, args.out.as_deref())
                }
                _ => write_text(
                    &to_json(&output.stylesheet, args.pretty)?,
                    args.out.as_deref(),
                ),
            }
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
