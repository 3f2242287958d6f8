use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;

mod demo;
mod report;

#[derive(Parser, Debug)]
#[command(name = "planar-cli")]
#[command(about = "Plane geometry walkthrough: points, vectors and their operations")]
struct Cmd {
    /// Defaults to `demo` with its default parameters
    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Action {
    /// Run every point/vector operation once and print labeled results
    Demo(DemoArgs),
    /// Print the unit vector of (x, y); fails on the zero vector
    Unit {
        #[arg(long, allow_negative_numbers = true)]
        x: f32,
        #[arg(long, allow_negative_numbers = true)]
        y: f32,
    },
    /// Print a small JSON block with versions and code revision
    Report,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct DemoArgs {
    /// Rotation angle in degrees (counter-clockwise)
    #[arg(long, default_value_t = DemoArgs::ANGLE, allow_negative_numbers = true)]
    pub angle: f32,
    /// Scalar factor applied to the difference vector
    #[arg(long, default_value_t = DemoArgs::K, allow_negative_numbers = true)]
    pub k: f32,
    /// Interpolation parameter for the lerp step (not clamped)
    #[arg(long, default_value_t = DemoArgs::T, allow_negative_numbers = true)]
    pub t: f32,
    /// Digits after the decimal point in printed values
    #[arg(long, default_value_t = DemoArgs::PRECISION)]
    pub precision: usize,
}

impl DemoArgs {
    const ANGLE: f32 = 90.0;
    const K: f32 = 0.5;
    const T: f32 = 0.5;
    const PRECISION: usize = 2;
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            angle: Self::ANGLE,
            k: Self::K,
            t: Self::T,
            precision: Self::PRECISION,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action.unwrap_or_else(|| Action::Demo(DemoArgs::default())) {
        Action::Demo(args) => run_demo(&args),
        Action::Unit { x, y } => unit(x, y),
        Action::Report => report(),
    }
}

fn run_demo(args: &DemoArgs) -> Result<()> {
    tracing::info!(
        angle = args.angle,
        k = args.k,
        t = args.t,
        precision = args.precision,
        "demo"
    );
    for line in demo::transcript(args)? {
        println!("{line}");
    }
    Ok(())
}

fn unit(x: f32, y: f32) -> Result<()> {
    tracing::info!(x, y, "unit");
    let u = demo::unit_vector(x, y)?;
    println!("{u}");
    Ok(())
}

fn report() -> Result<()> {
    let obj = report::Report::collect();
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_default_demo() {
        let cmd = Cmd::try_parse_from(["planar-cli"]).unwrap();
        assert!(cmd.action.is_none());
        let cmd = Cmd::try_parse_from(["planar-cli", "demo"]).unwrap();
        assert_eq!(cmd.action, Some(Action::Demo(DemoArgs::default())));
    }

    #[test]
    fn demo_accepts_negative_parameters() {
        let cmd =
            Cmd::try_parse_from(["planar-cli", "demo", "--angle", "-45", "--t", "-0.5"]).unwrap();
        match cmd.action {
            Some(Action::Demo(args)) => {
                assert_eq!(args.angle, -45.0);
                assert_eq!(args.t, -0.5);
                assert_eq!(args.k, DemoArgs::K);
            }
            other => panic!("expected demo, got {other:?}"),
        }
    }

    #[test]
    fn unit_requires_both_components() {
        assert!(Cmd::try_parse_from(["planar-cli", "unit", "--x", "1"]).is_err());
        let cmd = Cmd::try_parse_from(["planar-cli", "unit", "--x", "-3", "--y", "4"]).unwrap();
        assert_eq!(cmd.action, Some(Action::Unit { x: -3.0, y: 4.0 }));
    }
}
