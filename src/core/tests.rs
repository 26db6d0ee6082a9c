#[cfg(test)]
mod tests {
    use crate::core::{
        AnchorResolver, ContactField, ContactForm, ContactFormFields, ContactSubmitter,
        ScrollOptions, ScrollOutcome, Section, SectionNavigator, SimulatedSubmitter,
        SubmissionError, SubmissionStatus, submit,
    };
    use futures::poll;
    use std::sync::{Arc, Mutex};
    use std::task::Poll;
    use std::time::Duration;
    use tokio::sync::Notify;

    /// Resolver that records every scroll target
    #[derive(Default)]
    struct ScrollLog(Mutex<Vec<String>>);

    impl AnchorResolver for ScrollLog {
        fn scroll_into_view(&self, anchor_id: &str, _options: ScrollOptions) -> ScrollOutcome {
            self.0.lock().unwrap().push(anchor_id.to_string());
            ScrollOutcome::Scrolled
        }
    }

    /// Submitter that completes only when released
    struct GatedSubmitter {
        release: Arc<Notify>,
        received: Mutex<Vec<ContactFormFields>>,
    }

    impl GatedSubmitter {
        fn new() -> Self {
            Self {
                release: Arc::new(Notify::new()),
                received: Mutex::new(Vec::new()),
            }
        }
    }

    impl ContactSubmitter for GatedSubmitter {
        async fn submit(&self, fields: ContactFormFields) -> Result<(), SubmissionError> {
            self.received.lock().unwrap().push(fields);
            self.release.notified().await;
            Ok(())
        }
    }

    fn filled_form() -> Mutex<ContactForm> {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "Jane Doe");
        form.set_field(ContactField::Email, "jane@x.com");
        form.set_field(ContactField::Message, "hi");
        Mutex::new(form)
    }

    fn status(store: &Mutex<ContactForm>) -> SubmissionStatus {
        store.lock().unwrap().status()
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    #[test]
    fn test_current_tracks_last_request() {
        let log = ScrollLog::default();
        let mut navigator = SectionNavigator::new(&log);
        let sequence = [
            Section::Services,
            Section::Contact,
            Section::Contact,
            Section::Home,
            Section::Projects,
            Section::Services,
        ];

        for section in sequence {
            navigator.navigate_to(section);
            assert_eq!(navigator.current(), section);
            assert!(Section::ALL.contains(&navigator.current()));
        }
    }

    #[test]
    fn test_one_scroll_per_request() {
        let log = ScrollLog::default();
        let mut navigator = SectionNavigator::new(&log);
        let sequence = [
            Section::Projects,
            Section::Projects,
            Section::Home,
            Section::Contact,
        ];

        for section in sequence {
            navigator.navigate_to(section);
        }

        let expected: Vec<String> = sequence.iter().map(|s| s.anchor_id().to_string()).collect();
        assert_eq!(*log.0.lock().unwrap(), expected);
    }

    // ========================================================================
    // Contact submission cycle
    // ========================================================================

    #[tokio::test]
    async fn test_jane_doe_scenario() {
        let store = filled_form();
        let submitter = SimulatedSubmitter::new(Duration::from_millis(10));

        let result = submit(&store, &submitter).await;

        assert_eq!(result, Ok(()));
        let form = store.lock().unwrap();
        assert_eq!(form.status(), SubmissionStatus::Sent);
        assert_eq!(*form.fields(), ContactFormFields::default());
    }

    #[tokio::test]
    async fn test_sending_is_set_before_delay() {
        let store = filled_form();
        let submitter = SimulatedSubmitter::new(Duration::from_millis(20));

        let cycle = submit(&store, &submitter);
        // No poll yet: the call alone starts the cycle
        assert_eq!(status(&store), SubmissionStatus::Sending);

        cycle.await.unwrap();
        assert_eq!(status(&store), SubmissionStatus::Sent);
    }

    #[tokio::test]
    async fn test_edits_during_sending_survive_until_completion() {
        let store = filled_form();
        let submitter = GatedSubmitter::new();

        let cycle = submit(&store, &submitter);
        tokio::pin!(cycle);
        assert!(matches!(poll!(&mut cycle), Poll::Pending));

        store
            .lock()
            .unwrap()
            .set_field(ContactField::Message, "one more thing");
        assert!(matches!(poll!(&mut cycle), Poll::Pending));
        assert_eq!(
            store.lock().unwrap().field(ContactField::Message),
            "one more thing"
        );
        assert_eq!(status(&store), SubmissionStatus::Sending);

        submitter.release.notify_one();
        cycle.await.unwrap();

        let form = store.lock().unwrap();
        assert_eq!(form.status(), SubmissionStatus::Sent);
        assert!(form.fields().is_empty());
        // The payload was the snapshot taken at submit time
        assert_eq!(
            submitter.received.lock().unwrap()[0],
            ContactFormFields::new("Jane Doe", "jane@x.com", "hi")
        );
    }

    #[tokio::test]
    async fn test_second_submit_rejected_while_sending() {
        let store = filled_form();
        let submitter = GatedSubmitter::new();

        let first = submit(&store, &submitter);
        let second = submit(&store, &submitter).await;
        assert_eq!(second, Err(SubmissionError::InFlight));

        submitter.release.notify_one();
        assert_eq!(first.await, Ok(()));
        assert_eq!(submitter.received.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_returns_to_idle_and_keeps_fields() {
        let store = filled_form();
        let submitter = SimulatedSubmitter::failing(Duration::from_millis(5), "no endpoint");

        let result = submit(&store, &submitter).await;

        assert_eq!(
            result,
            Err(SubmissionError::Failed("no endpoint".to_string()))
        );
        let form = store.lock().unwrap();
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.field(ContactField::Name), "Jane Doe");
    }

    #[tokio::test]
    async fn test_retry_after_failure() {
        let store = filled_form();

        let failing = SimulatedSubmitter::failing(Duration::ZERO, "offline");
        assert!(submit(&store, &failing).await.is_err());

        let working = SimulatedSubmitter::new(Duration::ZERO);
        assert!(submit(&store, &working).await.is_ok());
        assert_eq!(status(&store), SubmissionStatus::Sent);
    }

    #[tokio::test]
    async fn test_poisoned_store_is_detached() {
        let store = Arc::new(filled_form());
        let holder = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = holder.lock().unwrap();
            panic!("form holder crashed");
        })
        .join();
        assert!(store.is_poisoned());

        let submitter = SimulatedSubmitter::new(Duration::ZERO);
        assert_eq!(
            submit(&*store, &submitter).await,
            Err(SubmissionError::Detached)
        );
    }

    #[tokio::test]
    async fn test_empty_form_is_submittable() {
        let store = Mutex::new(ContactForm::new());
        let submitter = SimulatedSubmitter::new(Duration::ZERO);

        assert_eq!(submit(&store, &submitter).await, Ok(()));
        assert_eq!(status(&store), SubmissionStatus::Sent);
    }
}
