use std::io::Write;

const HELP: &str = "\
R U N W A Y

Usage:
  $ runway init [projectDir]
  $ runway build [projectDir]
  $ runway watch [projectDir]
  $ runway dev [projectDir]
  $ runway routes [projectDir]
  $ runway setup
  $ runway reveal [entry] [variant]
  $ runway vite:dev [projectDir]
  $ runway vite:build [projectDir]

Options:
  --help, -h          Print this help message and exit
  --version, -v       Print the runway version and exit
`build` Options:
  --sourcemap         Generate source maps for production
`dev` Options:
  --command, -c       Command used to run your app server
  --manual            Enable manual mode
  --port, -p          Port for the dev server. Default: any open port
  --tls-key           Path to TLS key (key.pem)
  --tls-cert          Path to TLS certificate (cert.pem)
`init` Options:
  --no-delete         Keep the template's init script after running it
`routes` Options:
  --json              Print the routes as JSON
`reveal` Options:
  --no-typescript     Generate plain JavaScript files
`vite:build` Options:
  --assetsInlineLimit Static asset base64 inline threshold in bytes
  --clearScreen       Allow/disable clear screen when logging
  --config, -c        Use specified config file
  --emptyOutDir       Force empty outDir when it's outside of root
  --logLevel, -l      Info | warn | error | silent
  --minify            Enable/disable minification, or specify minifier
  --mode, -m          Set env mode
  --profile           Start built-in profiler
`vite:dev` Options:
  --clearScreen       Allow/disable clear screen when logging
  --config, -c        Use specified config file
  --cors              Enable CORS
  --force             Force the optimizer to ignore the cache and re-bundle
  --host              Specify hostname
  --logLevel, -l      Info | warn | error | silent
  --mode, -m          Set env mode
  --open              Open browser on startup
  --port, -p          Specify port
  --profile           Start built-in profiler
  --strictPort        Exit if specified port is already in use

Values:
  - projectDir        The project root directory, defaults to the current directory.
                      A directory given without a command starts `dev` in it.

Environment:
  RUNWAY_ROOT         Project root used by `init` when no directory is given
  NODE_ENV            Mode for `build` (default production) and `watch` (default development)
  RUNWAY_NODE         Runtime binary checked for version 18 or newer (default node)
  RUNWAY_PLUGIN_PREFIX
                      Prefix of the executables implementing each command (default runway)
  RUST_LOG            Log filter, e.g. RUST_LOG=runway=debug
";

/// Write the usage text.
pub fn render_help<W: Write>(w: &mut W) -> std::io::Result<()> {
    w.write_all(HELP.as_bytes())
}

/// Write the package version on its own line.
pub fn render_version<W: Write>(w: &mut W) -> std::io::Result<()> {
    writeln!(w, "{}", env!("CARGO_PKG_VERSION"))
}
