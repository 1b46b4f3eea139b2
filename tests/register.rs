#[cfg(test)]
mod tests {
    use ponto::libs::error::PontoError;
    use ponto::libs::event::{ClockAction, EventKind};
    use ponto::libs::register::check_transition;

    #[test]
    fn test_clock_in() {
        assert!(check_transition(None, ClockAction::In).is_ok());
        assert!(check_transition(Some(&EventKind::ClockOut), ClockAction::In).is_ok());
        assert_eq!(
            check_transition(Some(&EventKind::ClockIn), ClockAction::In),
            Err(PontoError::AlreadyClockedIn)
        );
    }

    #[test]
    fn test_clock_out() {
        assert!(check_transition(Some(&EventKind::ClockIn), ClockAction::Out).is_ok());
        assert!(check_transition(Some(&EventKind::Pause), ClockAction::Out).is_ok());
        assert!(check_transition(Some(&EventKind::Resume), ClockAction::Out).is_ok());
        assert_eq!(check_transition(None, ClockAction::Out), Err(PontoError::ClockInRequired));
        assert_eq!(
            check_transition(Some(&EventKind::ClockOut), ClockAction::Out),
            Err(PontoError::ClockInRequired)
        );
    }

    #[test]
    fn test_pause() {
        assert!(check_transition(Some(&EventKind::ClockIn), ClockAction::Pause).is_ok());
        assert!(check_transition(Some(&EventKind::Resume), ClockAction::Pause).is_ok());
        assert_eq!(check_transition(None, ClockAction::Pause), Err(PontoError::CannotPause));
        assert_eq!(
            check_transition(Some(&EventKind::Pause), ClockAction::Pause),
            Err(PontoError::CannotPause)
        );
        assert_eq!(
            check_transition(Some(&EventKind::ClockOut), ClockAction::Pause),
            Err(PontoError::CannotPause)
        );
    }

    #[test]
    fn test_resume() {
        assert!(check_transition(Some(&EventKind::Pause), ClockAction::Resume).is_ok());
        assert_eq!(check_transition(None, ClockAction::Resume), Err(PontoError::CannotResume));
        assert_eq!(
            check_transition(Some(&EventKind::ClockIn), ClockAction::Resume),
            Err(PontoError::CannotResume)
        );
    }

    #[test]
    fn test_unknown_last_kind() {
        let unknown = EventKind::Unknown("almoco".to_string());
        assert!(check_transition(Some(&unknown), ClockAction::In).is_ok());
        assert!(check_transition(Some(&unknown), ClockAction::Out).is_ok());
        assert!(check_transition(Some(&unknown), ClockAction::Pause).is_err());
    }

    #[test]
    fn test_action_maps_to_stored_kind() {
        assert_eq!(EventKind::from(ClockAction::In).as_str(), "entrada");
        assert_eq!(EventKind::from(ClockAction::Out).as_str(), "saida");
        assert_eq!(EventKind::from(ClockAction::Pause).as_str(), "pausa");
        assert_eq!(EventKind::from(ClockAction::Resume).as_str(), "retorno");
        assert_eq!(EventKind::parse("retorno"), EventKind::Resume);
        assert_eq!(EventKind::parse("lunch"), EventKind::Unknown("lunch".to_string()));
    }
}
