use std::str::FromStr;
use strum_macros::EnumString;
use crate::api::CheckoutPlan;
use crate::domain::AnnouncementId;

/// One discrete user action on the dashboard, one per input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardCommand {
    Dismiss(AnnouncementId),
    Phrase,
    Checkout(CheckoutPlan),
    Plan,
    Help,
    Quit,
}

#[derive(EnumString)]
#[strum(serialize_all = "lowercase")]
enum Keyword {
    Dismiss,
    Phrase,
    Trial,
    Subscribe,
    Plan,
    Help,
    Quit,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum CommandError {
    #[display("unknown command '{_0}'")]
    Unknown(#[error(not(source))] String),
    #[display("usage: {_0}")]
    Usage(#[error(not(source))] &'static str),
}

impl FromStr for DashboardCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (keyword, argument) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };
        let keyword = Keyword::from_str(&keyword.to_lowercase())
            .map_err(|_| CommandError::Unknown(keyword.to_owned()))?;
        let command = match keyword {
            Keyword::Dismiss if argument.is_empty() => Err(CommandError::Usage("dismiss <announcement-id>"))?,
            Keyword::Dismiss => Self::Dismiss(argument.into()),
            Keyword::Phrase => Self::Phrase,
            Keyword::Trial => Self::Checkout(CheckoutPlan::Trial),
            Keyword::Subscribe => Self::Checkout(CheckoutPlan::Subscription),
            Keyword::Plan => Self::Plan,
            Keyword::Help => Self::Help,
            Keyword::Quit => Self::Quit,
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_keyword() {
        let cases = [
            ("dismiss A1", DashboardCommand::Dismiss("A1".into())),
            ("phrase", DashboardCommand::Phrase),
            ("trial", DashboardCommand::Checkout(CheckoutPlan::Trial)),
            ("subscribe", DashboardCommand::Checkout(CheckoutPlan::Subscription)),
            ("plan", DashboardCommand::Plan),
            ("help", DashboardCommand::Help),
            ("quit", DashboardCommand::Quit),
        ];
        for (line, expected) in cases {
            assert_eq!(DashboardCommand::from_str(line).expect(line), expected);
        }
    }

    #[test]
    fn keyword_case_is_ignored_but_the_id_is_kept_verbatim() {
        assert_eq!(
            DashboardCommand::from_str("DISMISS Ann-01").unwrap(),
            DashboardCommand::Dismiss("Ann-01".into())
        );
    }

    #[test]
    fn dismiss_requires_an_id() {
        assert!(matches!(
            DashboardCommand::from_str("dismiss"),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn unknown_input_is_reported() {
        assert!(matches!(
            DashboardCommand::from_str("dance"),
            Err(CommandError::Unknown(_))
        ));
    }
}
