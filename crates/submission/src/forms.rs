use std::sync::Arc;

use quickquid_notification::{DeliveryConfig, DeliveryProvider};

use crate::{
    Clock, Collaborators, ContactForm, Dispatcher, MailHandoff, SiteConfig, SubmissionController,
    TimingConfig, WaitlistCounter, WaitlistForm,
};

/// Everything one page session needs: a contact form, a waitlist form and
/// the waitlist counter. The two forms never share state.
#[derive(Clone)]
pub struct Forms {
    pub contact: SubmissionController<ContactForm>,
    pub waitlist: SubmissionController<WaitlistForm>,
    counter: WaitlistCounter,
}

impl Forms {
    pub fn new(
        site: SiteConfig,
        timings: TimingConfig,
        delivery: &DeliveryConfig,
        provider: Arc<dyn DeliveryProvider>,
        clock: Arc<dyn Clock>,
        handoff: Arc<dyn MailHandoff>,
    ) -> Self {
        let counter = WaitlistCounter::new(site.waitlist_seed);
        let collaborators = Collaborators {
            site: Arc::new(site),
            timings,
            clock,
            handoff,
        };

        let contact = SubmissionController::contact(
            Dispatcher::new(
                provider.clone(),
                &delivery.service_id,
                &delivery.contact_template_id,
            ),
            collaborators.clone(),
        );

        let waitlist = SubmissionController::waitlist(
            Dispatcher::new(
                provider,
                &delivery.service_id,
                delivery.waitlist_template(),
            ),
            collaborators,
            counter.clone(),
        );

        Self {
            contact,
            waitlist,
            counter,
        }
    }

    pub fn waitlist_count(&self) -> u64 {
        self.counter.current()
    }
}
