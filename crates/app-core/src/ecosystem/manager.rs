//! Sending and receiving account handoffs

use super::account::{AccountName, AccountNameError};
use super::app::CompanionApp;
use super::config::EcosystemConfig;
use super::error::{HandoffError, Result};
use super::receiver::{accept_handoff, AccountReceiver, HandoffResult};
use super::handoff_intent;
use app_platform::{Intent, Messenger, NoticeSink, TargetHandle};
use i18n::{Translator, TranslatorError};

/// Notices shown to the user while sending a handoff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    /// No account name was given
    MissingAccount,
    /// The account name is not email-shaped
    InvalidAccount,
    /// The target app is not installed
    AppNotFound,
    /// The platform could not open the target app
    AppOpenFailed,
    /// Neither store link could be opened
    StoreOpenFailed,
}

impl Notice {
    /// Localized message id
    pub fn message_id(self) -> &'static str {
        match self {
            Notice::MissingAccount => "ecosystem-null-account",
            Notice::InvalidAccount => "ecosystem-invalid-account",
            Notice::AppNotFound => "ecosystem-app-not-found",
            Notice::AppOpenFailed => "ecosystem-app-open-failed",
            Notice::StoreOpenFailed => "ecosystem-store-open-failed",
        }
    }
}

/// Handles sending and receiving account info across companion apps
///
/// All calls are synchronous and one-shot: nothing is retried, queued or
/// remembered between calls.
#[derive(Debug)]
pub struct EcosystemManager<M, N> {
    messenger: M,
    notices: N,
    translator: Translator,
    config: EcosystemConfig,
}

impl<M: Messenger, N: NoticeSink> EcosystemManager<M, N> {
    /// Create a manager with default configuration and English strings
    pub fn new(messenger: M, notices: N) -> Self {
        Self { messenger, notices, translator: Translator::default(), config: EcosystemConfig::default() }
    }

    /// Create a manager from configuration, negotiating the string locale
    pub fn with_config(
        messenger: M,
        notices: N,
        config: EcosystemConfig,
    ) -> std::result::Result<Self, TranslatorError> {
        let translator = Translator::new(&config.locale_tags())?;
        Ok(Self { messenger, notices, translator, config })
    }

    /// Replace the translator
    pub fn with_translator(mut self, translator: Translator) -> Self {
        self.translator = translator;
        self
    }

    /// The messenger in use
    pub fn messenger(&self) -> &M {
        &self.messenger
    }

    /// The notice sink in use
    pub fn notices(&self) -> &N {
        &self.notices
    }

    /// The translator in use
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// The active configuration
    pub fn config(&self) -> &EcosystemConfig {
        &self.config
    }

    /// Open a companion app and hand it the account name
    ///
    /// If the app is installed it is launched with the handoff intent. If
    /// the account is missing or the app is not installed, the user is sent
    /// to the store listing instead. An account name that is present but
    /// malformed only produces a notice.
    ///
    /// Every error has already been shown to the user when this returns;
    /// the result is informational.
    pub fn open_app(&self, app: CompanionApp, account_name: Option<&str>) -> Result<TargetHandle> {
        tracing::debug!(
            "open app, package names: {:?}, account name: {:?}",
            app.package_names(),
            account_name
        );

        let account = match AccountName::parse(account_name) {
            Ok(account) => account,
            Err(AccountNameError::Missing) => {
                tracing::warn!("given account name is missing");
                self.show_notice(Notice::MissingAccount);
                self.fall_back_to_store(app);
                return Err(HandoffError::MissingAccount);
            }
            Err(e @ AccountNameError::InvalidShape(_)) => {
                tracing::warn!("{}", e);
                self.show_notice(Notice::InvalidAccount);
                return Err(e.into());
            }
        };

        let Some(target) = self.messenger.resolve_installed_target(app.package_names()) else {
            tracing::warn!("no package of {} is installed", app);
            self.show_notice(Notice::AppNotFound);
            self.fall_back_to_store(app);
            return Err(HandoffError::AppNotInstalled(app));
        };

        tracing::debug!("launching app {} ({}) with account={}", app, target.package(), account);
        let intent = handoff_intent(target.package(), &account);
        if let Err(e) = self.messenger.dispatch(&intent) {
            tracing::error!("exception launching app {:?}: {}", app.package_names(), e);
            self.show_notice(Notice::AppOpenFailed);
            return Err(e.into());
        }

        Ok(target)
    }

    /// Receive an account from an inbound intent
    ///
    /// Call this when the activity is created and whenever it gets a new
    /// intent.
    pub fn receive_account(&self, intent: Option<&Intent>) -> HandoffResult {
        tracing::debug!("receive account started");

        let result = accept_handoff(intent);
        match &result {
            Ok(account) => tracing::debug!("Account received from intent: {}", account),
            Err(e) => tracing::debug!("handoff rejected: {}", e),
        }
        result.into()
    }

    /// Receive an account and report the outcome to a callback
    ///
    /// Exactly one callback method is invoked. Error reasons are localized.
    pub fn receive_account_with<R: AccountReceiver + ?Sized>(&self, intent: Option<&Intent>, receiver: &mut R) {
        match self.receive_account(intent) {
            HandoffResult::Delivered(account) => receiver.on_account_received(account.as_str()),
            HandoffResult::Rejected(reason) => {
                let message = self.translator.get(reason.message_id());
                receiver.on_account_error(&message);
            }
        }
    }

    fn fall_back_to_store(&self, app: CompanionApp) {
        if let Err(e) = self.open_app_in_store(app) {
            tracing::warn!("store fallback failed: {}", e);
        }
    }

    /// Open the store listing of the app's production package
    ///
    /// Tries the in-store link, then the web link, each exactly once.
    fn open_app_in_store(&self, app: CompanionApp) -> Result<()> {
        let package = app.canonical_package();
        tracing::debug!("open app in store: {} ({})", app, package);

        let market = Intent::view(self.config.market_link(package));
        match self.messenger.dispatch(&market) {
            Ok(()) => return Ok(()),
            Err(e) => tracing::debug!("marketplace link not handled: {}", e),
        }

        let web = Intent::view(self.config.web_link(package));
        if let Err(e) = self.messenger.dispatch(&web) {
            tracing::error!("No browser available to open store for {}: {}", package, e);
            self.show_notice(Notice::StoreOpenFailed);
            return Err(HandoffError::StoreOpenFailed(package.to_string()));
        }

        Ok(())
    }

    fn show_notice(&self, notice: Notice) {
        let message = self.translator.get(notice.message_id());
        self.notices.show(&message, self.config.notice_length);
    }
}
