/* Stato della pagina About lato client.
    Loading -> Content  (risposta 2xx con body valido)
    Loading -> Error    (errore di rete, status non 2xx, body non valido)
   Content ed Error sono terminali per tutta la vita del componente: un esito
   che arriva dopo viene ignorato.
*/
use crate::models::AboutContent;

/// Messaggio mostrato quando il server risponde con uno status non 2xx.
pub const FETCH_FAILED: &str = "Failed to fetch about data";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AboutState {
    #[default]
    Loading,
    Content(AboutContent),
    Error(String),
}

impl AboutState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, AboutState::Loading)
    }

    /// Applica l'esito della fetch. Da uno stato terminale non si esce.
    pub fn resolve(self, outcome: Result<AboutContent, String>) -> Self {
        if self.is_terminal() {
            return self;
        }
        match outcome {
            Ok(content) => AboutState::Content(content),
            Err(message) => AboutState::Error(message),
        }
    }

    /// Esito di una risposta HTTP già letta come testo.
    pub fn outcome_from_response(status: u16, body: &str) -> Result<AboutContent, String> {
        if !(200..300).contains(&status) {
            return Err(FETCH_FAILED.to_string());
        }
        serde_json::from_str::<AboutContent>(body).map_err(|e| e.to_string())
    }

    /// Testo da mostrare quando la pagina non ha contenuto.
    pub fn placeholder(&self) -> Option<String> {
        match self {
            AboutState::Loading => Some("Loading...".to_string()),
            AboutState::Error(message) => Some(format!("Error: {}", message)),
            AboutState::Content(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn about_json() -> String {
        serde_json::to_string(&AboutContent::page()).unwrap()
    }

    #[test]
    fn starts_loading() {
        let state = AboutState::default();
        assert_eq!(state, AboutState::Loading);
        assert!(!state.is_terminal());
        assert_eq!(state.placeholder().as_deref(), Some("Loading..."));
    }

    #[test]
    fn successful_response_becomes_content() {
        let outcome = AboutState::outcome_from_response(200, &about_json());
        let state = AboutState::Loading.resolve(outcome);
        assert_eq!(state, AboutState::Content(AboutContent::page()));
        assert!(state.placeholder().is_none());
    }

    #[test]
    fn non_success_status_becomes_error() {
        let outcome = AboutState::outcome_from_response(500, "<html>oops</html>");
        let state = AboutState::Loading.resolve(outcome);
        assert_eq!(state, AboutState::Error(FETCH_FAILED.to_string()));
        assert_eq!(state.placeholder().unwrap(), "Error: Failed to fetch about data");
    }

    #[test]
    fn unparseable_body_becomes_error() {
        let outcome = AboutState::outcome_from_response(200, "not json");
        assert!(matches!(AboutState::Loading.resolve(outcome), AboutState::Error(_)));
    }

    #[test]
    fn terminal_states_ignore_late_outcomes() {
        let content = AboutState::Loading.resolve(Ok(AboutContent::page()));
        let after = content.clone().resolve(Err("network down".to_string()));
        assert_eq!(after, content);

        let failed = AboutState::Loading.resolve(Err("network down".to_string()));
        let after = failed.clone().resolve(Ok(AboutContent::page()));
        assert_eq!(after, failed);
    }
}
