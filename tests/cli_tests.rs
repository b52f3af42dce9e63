#[cfg(test)]
mod tests {
    use clap::Parser;
    use cubeturner_midi::cli::parse_channel;
    use cubeturner_midi::*;
    use std::path::PathBuf;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["test"]);
        assert_eq!(args.device_path, None);
        assert_eq!(args.port_name, "lekatoMidiPort");
        assert_eq!(args.channel.user(), 10);
        assert_eq!(args.channel.wire(), 9);
        assert!(!args.list);
        assert!(!args.grab);
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from([
            "test",
            "-d",
            "/dev/input/event15",
            "-n",
            "turner",
            "-c",
            "3",
            "-g",
            "-v",
        ]);
        assert_eq!(args.device_path, Some(PathBuf::from("/dev/input/event15")));
        assert_eq!(args.port_name, "turner");
        assert_eq!(args.channel.wire(), 2);
        assert!(args.grab);
        assert!(args.verbose);
        assert!(!args.list);
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "test",
            "--device",
            "/dev/input/event3",
            "--port-name",
            "pedal",
            "--channel",
            "16",
            "--grab",
            "--verbose",
            "--list",
        ]);
        assert_eq!(args.device_path, Some(PathBuf::from("/dev/input/event3")));
        assert_eq!(args.port_name, "pedal");
        assert_eq!(args.channel.wire(), 15);
        assert!(args.grab);
        assert!(args.verbose);
        assert!(args.list);
    }

    #[test]
    fn test_channel_normalization() {
        assert_eq!(parse_channel("1").unwrap().wire(), 0);
        assert_eq!(parse_channel("16").unwrap().wire(), 15);
        assert_eq!(Channel::from_user(10).unwrap().wire(), 9);
    }

    #[test]
    fn test_channel_out_of_range_is_rejected() {
        assert!(matches!(
            Channel::from_user(0),
            Err(BridgeError::InvalidChannel(_))
        ));
        assert!(matches!(
            Channel::from_user(17),
            Err(BridgeError::InvalidChannel(_))
        ));
        assert!(parse_channel("0").is_err());
        assert!(parse_channel("17").is_err());
        assert!(parse_channel("ten").is_err());
        assert!(parse_channel("-1").is_err());
    }

    #[test]
    fn test_invalid_channel_fails_parsing() {
        for bad in ["0", "17", "x"] {
            let result = Args::try_parse_from(["test", "--channel", bad]);
            let err = result.expect_err("channel should be rejected");
            assert!(err.use_stderr());
        }
    }

    #[test]
    fn test_invalid_channel_error_message() {
        let err = Channel::from_user(17).unwrap_err();
        assert_eq!(err.to_string(), "Invalid channel number \"17\"");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_channel_display_is_user_facing() {
        assert_eq!(Channel::from_user(1).unwrap().to_string(), "1");
        assert_eq!(Channel::from_user(16).unwrap().to_string(), "16");
    }

    #[test]
    fn test_config_from_args() {
        let args = Args::parse_from(["test", "-c", "1", "-g", "-d", "/dev/input/event7"]);
        let config = Config::from_args(args);
        assert_eq!(config.channel.wire(), 0);
        assert!(config.grab);
        assert!(!config.verbose);
        assert!(!config.list);
        assert_eq!(config.port_name, "lekatoMidiPort");
        assert_eq!(config.device_path, Some(PathBuf::from("/dev/input/event7")));
    }

    #[test]
    fn test_config_default_matches_cli_defaults() {
        let from_cli = Config::from_args(Args::parse_from(["test"]));
        let default = Config::default();
        assert_eq!(from_cli.channel, default.channel);
        assert_eq!(from_cli.port_name, default.port_name);
        assert_eq!(from_cli.device_path, default.device_path);
    }
}
