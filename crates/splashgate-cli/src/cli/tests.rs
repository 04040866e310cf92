#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_dev_args() {
        let cli = Cli::parse_from(["splashgate", "dev", "--port", "3000", "--no-strict-port"]);
        match cli.command {
            Command::Dev(args) => {
                assert_eq!(args.port, Some(3000));
                assert!(args.no_strict_port);
                assert!(!args.strict_port);
                assert!(args.host.is_none());
            }
            other => panic!("expected dev, got {other:?}"),
        }
    }

    #[test]
    fn test_strict_port_flags_conflict() {
        let result =
            Cli::try_parse_from(["splashgate", "dev", "--strict-port", "--no-strict-port"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_args() {
        let cli = Cli::parse_from(["splashgate", "build", "-d", "out", "--no-minify"]);
        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.out_dir, Some(PathBuf::from("out")));
                assert!(args.no_minify);
                assert!(!args.sourcemap);
            }
            other => panic!("expected build, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "splashgate",
            "check",
            "--cwd",
            "app",
            "--config",
            "custom.json",
            "--verbose",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.cwd, Some(PathBuf::from("app")));
        assert_eq!(cli.config, Some(PathBuf::from("custom.json")));
        assert!(matches!(cli.command, Command::Check(_)));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["splashgate", "-v", "-q", "check"]).is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["splashgate"]).is_err());
    }
}
