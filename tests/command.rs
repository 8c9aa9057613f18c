mod tests {
    use cct_dimmer::Command;

    const CODES: [(u16, Command); 11] = [
        (69, Command::PowerToggle),
        (71, Command::NextPreset),
        (9, Command::Brighter),
        (7, Command::Darker),
        (25, Command::Colder),
        (64, Command::Warmer),
        (8, Command::NightToggle),
        (12, Command::Level10),
        (24, Command::Level50),
        (94, Command::Level100),
        (28, Command::Store),
    ];

    #[test]
    fn test_command_from_code() {
        for (code, command) in CODES {
            assert_eq!(Command::from_code(code), Some(command), "code {code}");
            assert_eq!(command.code(), code);
        }
    }

    #[test]
    fn test_command_unknown_codes() {
        assert_eq!(Command::from_code(0), None);
        assert_eq!(Command::from_code(70), None);
        assert_eq!(Command::from_code(0x1D), None);
        assert_eq!(Command::from_code(u16::MAX), None);
    }

    #[test]
    fn test_command_from_hex_code() {
        // Remote tables usually list codes in hex
        assert_eq!(Command::from_code(0x1C), Some(Command::Store));
        assert_eq!(Command::from_code(0x45), Some(Command::PowerToggle));
        assert_eq!(Command::from_code(0x5E), Some(Command::Level100));
    }

    #[test]
    fn test_command_all_is_complete() {
        assert_eq!(Command::ALL.len(), CODES.len());
        for (_, command) in CODES {
            assert!(Command::ALL.contains(&command));
        }
    }

    #[test]
    fn test_command_allows_repeat() {
        let repeating: Vec<_> = Command::ALL
            .iter()
            .copied()
            .filter(|c| c.allows_repeat())
            .collect();
        assert_eq!(repeating.len(), 4);
        assert!(repeating.contains(&Command::Brighter));
        assert!(repeating.contains(&Command::Darker));
        assert!(repeating.contains(&Command::Colder));
        assert!(repeating.contains(&Command::Warmer));
    }

    #[test]
    fn test_command_target_level() {
        assert_eq!(Command::Level10.target_level(), Some(25));
        assert_eq!(Command::Level50.target_level(), Some(128));
        assert_eq!(Command::Level100.target_level(), Some(255));
        assert_eq!(Command::Brighter.target_level(), None);
    }

    #[test]
    fn test_command_as_str() {
        assert_eq!(Command::NightToggle.as_str(), "night_toggle");
        assert_eq!(Command::Level50.as_str(), "level_50");
    }
}
