// 命令行解析：拆分命令关键字和参数串，校验参数个数
use crate::utils::error::ShellError;

pub const CONNECT_USAGE: &str = "connect <hostname> <username> <password>";
pub const PUT_USAGE: &str = "put <local_path> <remote_path>";
pub const GET_USAGE: &str = "get <remote_path> <local_path>";

/// Help text shown by `help` / `?`, one line per command.
pub const HELP: &[(&str, &str)] = &[
    ("connect", "Connect to a device: connect <hostname> <username> <password>"),
    ("put", "Copy a file to the device: put <local_path> <remote_path>"),
    ("get", "Retrieve a file from the device: get <remote_path> <local_path>"),
    ("exit", "Exit the SCP shell"),
];

/// An input line split into a command keyword and its raw argument string.
/// Argument tokenization happens later, in each handler, because `put`/`get`
/// check the connection state before looking at their arguments.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Connect(&'a str),
    Put(&'a str),
    Get(&'a str),
    Exit,
    Help(&'a str),
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        // "?" 是 help 的别名
        if let Some(topic) = line.strip_prefix('?') {
            return Command::Help(topic.trim());
        }
        let (keyword, args) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };
        match keyword {
            "connect" => Command::Connect(args),
            "put" => Command::Put(args),
            "get" => Command::Get(args),
            "exit" => Command::Exit,
            "help" => Command::Help(args),
            _ => Command::Unknown(keyword),
        }
    }
}

/// Split an argument string on whitespace and require exactly `N` tokens.
/// Any other count is a usage error carrying the command's usage string.
pub fn expect_args<'a, const N: usize>(
    args: &'a str,
    usage: &'static str,
) -> Result<[&'a str; N], ShellError> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    <[&str; N]>::try_from(tokens).map_err(|_| ShellError::Usage(usage))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!(
            Command::parse("connect host alice secret"),
            Command::Connect("host alice secret")
        );
        assert_eq!(Command::parse("put a.txt /tmp/a.txt"), Command::Put("a.txt /tmp/a.txt"));
        assert_eq!(Command::parse("get /tmp/b.txt b.txt"), Command::Get("/tmp/b.txt b.txt"));
        assert_eq!(Command::parse("exit"), Command::Exit);
    }

    #[test]
    fn test_parse_keyword_without_args() {
        assert_eq!(Command::parse("connect"), Command::Connect(""));
        assert_eq!(Command::parse("put"), Command::Put(""));
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        assert_eq!(Command::parse("  exit  "), Command::Exit);
        assert_eq!(Command::parse("put  a   b "), Command::Put("a   b"));
    }

    #[test]
    fn test_parse_help_and_alias() {
        assert_eq!(Command::parse("help"), Command::Help(""));
        assert_eq!(Command::parse("help put"), Command::Help("put"));
        assert_eq!(Command::parse("?"), Command::Help(""));
        assert_eq!(Command::parse("? get"), Command::Help("get"));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(Command::parse("ls -la"), Command::Unknown("ls"));
    }

    #[test]
    fn test_expect_args_exact_count() {
        let [host, user, pass] =
            expect_args::<3>("host alice secret", CONNECT_USAGE).unwrap();
        assert_eq!((host, user, pass), ("host", "alice", "secret"));
    }

    #[test]
    fn test_expect_args_wrong_count_is_usage_error() {
        let err = expect_args::<3>("host alice", CONNECT_USAGE).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid arguments. Usage: connect <hostname> <username> <password>"
        );
        assert!(expect_args::<2>("a b c", PUT_USAGE).is_err());
        assert!(expect_args::<2>("", GET_USAGE).is_err());
    }
}
