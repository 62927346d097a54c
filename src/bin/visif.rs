use anyhow::Context as _;
use clap::{Parser, Subcommand};
use visif::{InputValue, InputValues, VisibleIf};

#[derive(Parser, Debug)]
#[command(name = "visif", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile an expression and report syntax errors.
    Check(CheckArgs),
    /// Compile and evaluate an expression against input values.
    Eval(EvalArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Expression source, e.g. 'input["blend_mode"] == 2 && !advanced'.
    expr: String,

    /// Print the parsed tree as JSON.
    #[arg(long)]
    dump_tree: bool,
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Expression source.
    expr: String,

    /// Input value as NAME=VALUE; VALUE is true/false, a float, or
    /// comma-separated floats for a vector. Repeatable.
    #[arg(long = "input", value_name = "NAME=VALUE")]
    inputs: Vec<String>,

    /// Print the raw result instead of the coerced visibility boolean.
    #[arg(long)]
    raw: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Eval(args) => cmd_eval(args),
    }
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let expr = VisibleIf::compile(&args.expr).with_context(|| "compile expression")?;
    if args.dump_tree {
        println!("{}", serde_json::to_string_pretty(expr.root())?);
    } else {
        let refs = expr.referenced_inputs();
        println!("ok: {} input reference(s): {}", refs.len(), refs.join(", "));
    }
    Ok(())
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let expr = VisibleIf::compile(&args.expr).with_context(|| "compile expression")?;

    let mut values = InputValues::new();
    for pair in &args.inputs {
        let (name, value) = parse_input_pair(pair)?;
        values.insert(name, value);
    }

    if args.raw {
        let result = expr.evaluate(&values).with_context(|| "evaluate expression")?;
        println!("{result}");
    } else {
        let visible = expr
            .is_visible(&values)
            .with_context(|| "evaluate expression")?;
        println!("{visible}");
    }
    Ok(())
}

fn parse_input_pair(pair: &str) -> anyhow::Result<(String, InputValue)> {
    let (name, raw) = pair
        .split_once('=')
        .with_context(|| format!("input '{pair}' is not NAME=VALUE"))?;

    let value = match raw {
        "true" => InputValue::Bool(true),
        "false" => InputValue::Bool(false),
        _ if raw.contains(',') => {
            let comps = raw
                .split(',')
                .map(|c| {
                    c.trim()
                        .parse::<f64>()
                        .with_context(|| format!("bad vector component '{c}' in '{pair}'"))
                })
                .collect::<anyhow::Result<Vec<f64>>>()?;
            InputValue::Vector(comps)
        }
        _ => InputValue::Float(
            raw.parse::<f64>()
                .with_context(|| format!("bad value '{raw}' in '{pair}'"))?,
        ),
    };

    Ok((name.to_string(), value))
}
