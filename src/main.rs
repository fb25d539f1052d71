use miette::Result;
use runway::config::resolve::resolve_config;
use runway::environment::Environment;
use runway::toolchain::plugin::PluginToolchain;
use runway::{runtime, Invocation};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let tokens: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let env = Environment::from_process()?;
    let config = resolve_config(&env.cwd)?;
    let runtime_version = runtime::probe_version(&config.runtime_binary)?;

    let mut invocation = Invocation {
        env,
        runtime_version,
        top_level: true,
    };
    let mut toolchain = PluginToolchain::new(config.plugin_prefix);
    let mut stdout = std::io::stdout().lock();
    runway::run(&tokens, &mut invocation, &mut toolchain, &mut stdout)?;
    Ok(())
}
