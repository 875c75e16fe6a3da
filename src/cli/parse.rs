use super::CliFlags;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

/// Parse `args` (including the program name at index 0).
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--save" => flags.save = true,
            "--no-special" => flags.no_special = true,
            "-l" | "--length" => {
                i += 1;
                flags.length = Some(number(arg, args.get(i))?);
            }
            "-n" | "--number" => {
                i += 1;
                flags.number = Some(number(arg, args.get(i))?);
            }
            "--only" => {
                i += 1;
                let list = args
                    .get(i)
                    .ok_or_else(|| ParseError::MissingValue(arg.to_string()))?;
                flags.only = Some(
                    list.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect(),
                );
            }
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn number(flag: &str, value: Option<&String>) -> Result<usize, ParseError> {
    let value = value.ok_or_else(|| ParseError::MissingValue(flag.to_string()))?;
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.clone()))
}
