use crate::commands::{CmdMessage, CmdResult, Session};
use crate::error::Result;
use crate::filter::Toggled;
use crate::model::Dimension;

/// Apply toggles in order, reporting what each one did.
///
/// An unknown value stops the run; toggles before it stay applied.
pub fn run<D: Dimension>(session: &mut Session<D>, toggles: &[(D, String)]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for (dimension, value) in toggles {
        let message = match session.filter_mut().toggle(*dimension, value)? {
            Toggled::Selected => {
                CmdMessage::success(format!("Selected {}={}", dimension.name(), value))
            }
            Toggled::Cleared => CmdMessage::info(format!("Cleared {}={}", dimension.name(), value)),
            Toggled::Ignored => CmdMessage::warning(format!(
                "{}={} is disabled; ignored",
                dimension.name(),
                value
            )),
        };
        result.add_message(message);
    }

    Ok(result.with_facets(session.filter().views()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::config::FacetzConfig;
    use crate::error::FacetzError;
    use crate::model::ShoeDimension::{self, Colors, Sizes};
    use crate::store::memory::fixtures::sample_catalog;
    use crate::store::CatalogStore;

    fn session() -> Session<ShoeDimension> {
        let records = sample_catalog().load_records().unwrap();
        Session::from_records(&records, &FacetzConfig::default()).unwrap()
    }

    #[test]
    fn reports_each_toggle() {
        let mut session = session();
        let result = run(
            &mut session,
            &[
                (Colors, "blue".to_string()),
                (Sizes, "10".to_string()),
                (Colors, "blue".to_string()),
            ],
        )
        .unwrap();

        let levels: Vec<_> = result.messages.iter().map(|m| m.level.clone()).collect();
        assert_eq!(
            levels,
            [MessageLevel::Success, MessageLevel::Warning, MessageLevel::Info]
        );
        assert_eq!(result.messages[1].content, "sizes=10 is disabled; ignored");
        assert!(session.filter().selection().is_empty());
    }

    #[test]
    fn returns_updated_facets() {
        let mut session = session();
        let result = run(&mut session, &[(Colors, "blue".to_string())]).unwrap();

        assert_eq!(result.facets.len(), 3);
        let ten = &result.facets[1].values[1];
        assert_eq!(ten.value, "10");
        assert!(ten.disabled);
    }

    #[test]
    fn unknown_value_stops_but_keeps_earlier_toggles() {
        let mut session = session();
        let err = run(
            &mut session,
            &[(Colors, "red".to_string()), (Sizes, "12".to_string())],
        )
        .unwrap_err();

        assert!(matches!(err, FacetzError::UnknownValue { dimension: "sizes", .. }));
        assert_eq!(
            session.filter().selection().get(Colors).map(String::as_str),
            Some("red")
        );
    }
}
