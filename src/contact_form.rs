use log::{debug, warn};

use crate::config;
use crate::mailto::MailtoLink;
use crate::platform::{MailComposer, Scheduler};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Success,
    // Only reachable once delivery goes over the network instead of mailto.
    #[allow(dead_code)]
    Error,
}

impl SubmitStatus {
    /// Success and Error both fall back to Idle after the reset delay.
    pub fn is_settled(self) -> bool {
        matches!(self, SubmitStatus::Success | SubmitStatus::Error)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: SubmitStatus,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            status: SubmitStatus::Idle,
        }
    }
}

impl ContactFormState {
    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn link(&self) -> MailtoLink {
        MailtoLink::for_message(config::CONTACT_EMAIL, &self.name, &self.email, &self.message)
    }

    /// Hands the message to the mail client, clears the form and reports
    /// success. Success is reported even if the composer fails, since there is
    /// no way to learn whether a mail client actually opened.
    pub fn submit(&mut self, composer: &impl MailComposer) {
        let link = self.link();
        debug!("Handing message to mail client: {}", link);
        if let Err(err) = composer.compose(&link) {
            warn!("Mail client handoff failed: {}", err);
        }

        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.status = SubmitStatus::Success;
    }

    pub fn reset_status(&mut self) {
        self.status = SubmitStatus::Idle;
    }
}

/// Everything the contact section owns while mounted: the form, the mail
/// handoff and the pending status reset.
pub struct ContactSession<C: MailComposer, S: Scheduler> {
    pub form: ContactFormState,
    composer: C,
    scheduler: S,
    reset_timer: Option<S::Handle>,
}

impl<C: MailComposer, S: Scheduler> ContactSession<C, S> {
    pub fn new(composer: C, scheduler: S) -> Self {
        Self {
            form: ContactFormState::default(),
            composer,
            scheduler,
            reset_timer: None,
        }
    }

    /// Submits the form and arms `on_reset` to run once the status banner has
    /// been shown for the reset delay.
    pub fn submit<F>(&mut self, on_reset: F)
    where
        F: FnOnce() + 'static,
    {
        self.form.submit(&self.composer);
        if self.form.status.is_settled() {
            // Replacing the handle drops, and so cancels, any earlier reset.
            self.reset_timer = Some(
                self.scheduler
                    .schedule(config::STATUS_RESET_DELAY_MS, Box::new(on_reset)),
            );
        }
    }

    pub fn reset_status(&mut self) {
        self.reset_timer = None;
        self.form.reset_status();
    }

    /// Cancels the pending reset, if any. Returns whether one was pending.
    pub fn teardown(&mut self) -> bool {
        self.reset_timer.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PageError;
    use crate::platform::{MockMailComposer, MockScheduler};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn filled() -> ContactFormState {
        let mut form = ContactFormState::default();
        form.set_field(FormField::Name, "Ada".to_string());
        form.set_field(FormField::Email, "ada@example.com".to_string());
        form.set_field(FormField::Message, "Hello".to_string());
        form
    }

    #[test]
    fn starts_empty_and_idle() {
        let form = ContactFormState::default();
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn editing_a_field_leaves_the_rest_alone() {
        let mut form = filled();
        form.status = SubmitStatus::Success;

        form.set_field(FormField::Email, "grace@example.com".to_string());

        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "grace@example.com");
        assert_eq!(form.message, "Hello");
        assert_eq!(form.status, SubmitStatus::Success);
    }

    #[test]
    fn submit_hands_off_message_and_clears_form() {
        let mut composer = MockMailComposer::new();
        composer
            .expect_compose()
            .withf(|link: &MailtoLink| {
                let uri = link.to_uri();
                let (_, query) = uri.split_once('?').unwrap_or_default();
                let mut params = query.split('&');
                let subject = params.next().and_then(|p| p.strip_prefix("subject="));
                let body = params.next().and_then(|p| p.strip_prefix("body="));
                link.recipient == config::CONTACT_EMAIL
                    && subject.map(|s| urlencoding::decode(s).map(|d| d == "Message from Ada")) == Some(Ok(true))
                    && body.map(|b| {
                        urlencoding::decode(b)
                            .map(|d| d == "Name: Ada\nEmail: ada@example.com\n\nMessage:\nHello")
                    }) == Some(Ok(true))
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut form = filled();
        form.submit(&composer);

        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");
        assert_eq!(form.status, SubmitStatus::Success);
    }

    #[test]
    fn composer_failure_still_reports_success() {
        let mut composer = MockMailComposer::new();
        composer
            .expect_compose()
            .times(1)
            .returning(|_| Err(PageError::NoWindow));

        let mut form = filled();
        form.submit(&composer);

        assert_eq!(form.status, SubmitStatus::Success);
        assert_eq!(form, ContactFormState { status: SubmitStatus::Success, ..Default::default() });
    }

    #[test]
    fn settled_status_resets_to_idle() {
        let mut composer = MockMailComposer::new();
        composer.expect_compose().returning(|_| Ok(()));

        let mut form = filled();
        form.submit(&composer);
        assert!(form.status.is_settled());

        form.reset_status();
        assert_eq!(form.status, SubmitStatus::Idle);
        assert!(!form.status.is_settled());
    }

    #[test]
    fn error_status_also_settles() {
        assert!(SubmitStatus::Error.is_settled());
    }

    type Log = Rc<RefCell<Vec<String>>>;

    /// Keeps scheduled tasks until the test fires them; handles log when released.
    #[derive(Default)]
    struct ManualScheduler {
        log: Log,
        tasks: Rc<RefCell<Vec<(u32, Box<dyn FnOnce()>)>>>,
    }

    struct TimerHandle {
        id: usize,
        log: Log,
    }

    impl Drop for TimerHandle {
        fn drop(&mut self) {
            self.log.borrow_mut().push(format!("release {}", self.id));
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = TimerHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerHandle {
            let mut tasks = self.tasks.borrow_mut();
            let id = tasks.len();
            self.log.borrow_mut().push(format!("schedule {} after {}ms", id, delay_ms));
            tasks.push((delay_ms, task));
            TimerHandle { id, log: self.log.clone() }
        }
    }

    fn accepting_composer() -> MockMailComposer {
        let mut composer = MockMailComposer::new();
        composer.expect_compose().returning(|_| Ok(()));
        composer
    }

    fn filled_session<S: Scheduler>(scheduler: S) -> ContactSession<MockMailComposer, S> {
        let mut session = ContactSession::new(accepting_composer(), scheduler);
        session.form = filled();
        session
    }

    #[test]
    fn submit_schedules_reset_after_five_seconds() {
        let mut scheduler = MockScheduler::new();
        scheduler
            .expect_schedule()
            .withf(|delay_ms, _| *delay_ms == 5_000)
            .times(1)
            .return_const(());

        let mut session = filled_session(scheduler);
        session.submit(|| {});

        assert_eq!(session.form.status, SubmitStatus::Success);
    }

    #[test]
    fn status_stays_success_until_reset_fires() {
        let scheduler = ManualScheduler::default();
        let tasks = scheduler.tasks.clone();
        let fired = Rc::new(RefCell::new(false));
        let mut session = filled_session(scheduler);

        let flag = fired.clone();
        session.submit(move || *flag.borrow_mut() = true);
        assert_eq!(session.form.status, SubmitStatus::Success);

        let (delay_ms, task) = tasks.borrow_mut().remove(0);
        assert_eq!(delay_ms, 5_000);
        task();
        assert!(*fired.borrow());

        session.reset_status();
        assert_eq!(session.form.status, SubmitStatus::Idle);
        assert!(!session.teardown());
    }

    #[test]
    fn resubmit_cancels_earlier_reset() {
        let scheduler = ManualScheduler::default();
        let log = scheduler.log.clone();
        let mut session = filled_session(scheduler);

        session.submit(|| {});
        session.form = filled();
        session.submit(|| {});

        assert_eq!(
            *log.borrow(),
            vec!["schedule 0 after 5000ms", "schedule 1 after 5000ms", "release 0"]
        );
        assert!(session.teardown());
    }

    #[test]
    fn teardown_cancels_pending_reset() {
        let scheduler = ManualScheduler::default();
        let log = scheduler.log.clone();
        let mut session = filled_session(scheduler);
        session.submit(|| {});

        assert!(session.teardown());

        assert_eq!(log.borrow().last().map(String::as_str), Some("release 0"));
        assert!(!session.teardown());
        assert_eq!(session.form.status, SubmitStatus::Success);
    }

    #[test]
    fn dropping_session_cancels_pending_reset() {
        let scheduler = ManualScheduler::default();
        let log = scheduler.log.clone();
        let mut session = filled_session(scheduler);
        session.submit(|| {});

        drop(session);

        assert_eq!(*log.borrow(), vec!["schedule 0 after 5000ms", "release 0"]);
    }

    #[test]
    fn nothing_is_scheduled_before_submit() {
        let mut scheduler = MockScheduler::new();
        scheduler.expect_schedule().times(0);

        let mut session = filled_session(scheduler);
        session.form.set_field(FormField::Name, "Grace".to_string());

        assert!(!session.teardown());
    }
}
