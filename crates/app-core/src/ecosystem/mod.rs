//! Account handoff between companion apps
//!
//! A sending app calls [`EcosystemManager::open_app`] with the account the
//! user is signed in with. If the target app is installed it receives an
//! intent carrying the account name; otherwise the user is sent to the
//! store listing. The receiving app passes its inbound intent to
//! [`EcosystemManager::receive_account`].
//!
//! The receiving activity has to declare an intent filter for
//! [`ECOSYSTEM_INTENT_ACTION`]:
//!
//! ```xml
//! <activity android:name=".ui.activity.MainActivity"
//!           android:exported="true"
//!           android:launchMode="singleTop">
//!     <intent-filter>
//!         <action android:name="com.nextcloud.intent.OPEN_ECOSYSTEM_APP" />
//!         <category android:name="android.intent.category.DEFAULT" />
//!     </intent-filter>
//! </activity>
//! ```

pub mod account;
pub mod app;
pub mod config;
pub mod error;
pub mod manager;
pub mod receiver;

pub use account::{is_valid_account_name, AccountName, AccountNameError, ACCOUNT_NAME_PATTERN_REGEX};
pub use app::{CompanionApp, UnknownAppError};
pub use config::{ConfigError, EcosystemConfig, PLAY_STORE_LINK, PLAY_STORE_MARKET_LINK};
pub use error::{HandoffError, RejectReason};
pub use manager::{EcosystemManager, Notice};
pub use receiver::{accept_handoff, AccountReceiver, HandoffResult};

use app_platform::{Intent, IntentFlags};

/// Action identifying a handoff intent
pub const ECOSYSTEM_INTENT_ACTION: &str = "com.nextcloud.intent.OPEN_ECOSYSTEM_APP";

/// Extra holding the account name
pub const EXTRA_KEY_ACCOUNT: &str = "KEY_ACCOUNT";

/// Build the handoff intent for a resolved package
pub fn handoff_intent(package: &str, account: &AccountName) -> Intent {
    Intent::new(ECOSYSTEM_INTENT_ACTION)
        .with_package(package)
        .with_extra(EXTRA_KEY_ACCOUNT, account.as_str())
        .with_flags(IntentFlags::NEW_TASK_SINGLE_TOP)
}
