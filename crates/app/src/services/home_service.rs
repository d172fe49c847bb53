//! Home service — use-cases for driving the devices of a home.

use smarthome_domain::error::SmartHomeError;
use smarthome_domain::home::SmartHome;
use smarthome_domain::service::ServiceCall;

/// Application service owning one [`SmartHome`].
#[derive(Debug, Default)]
pub struct HomeService {
    home: SmartHome,
}

impl HomeService {
    /// Create a service around a home with every device at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of the home.
    #[must_use]
    pub fn home(&self) -> &SmartHome {
        &self.home
    }

    /// Apply a single validated call.
    #[tracing::instrument(skip_all, fields(call = %call))]
    pub fn call(&mut self, call: ServiceCall) -> &SmartHome {
        self.home.apply(call);
        tracing::debug!(
            light = %self.home.light,
            thermostat = %self.home.thermostat,
            door_lock = %self.home.door_lock,
            "service call applied"
        );
        &self.home
    }

    /// Parse a call written as `<device>.<service>[=<value>]` and apply it.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Validation`] if the call cannot be parsed;
    /// the home is left untouched.
    pub fn call_str(&mut self, raw: &str) -> Result<&SmartHome, SmartHomeError> {
        let call = parse(raw)?;
        Ok(self.call(call))
    }

    /// Parse a whole script of calls, then apply them in order.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Validation`] for the first call that cannot
    /// be parsed. No call of the script is applied in that case.
    #[tracing::instrument(skip_all)]
    pub fn run<I>(&mut self, calls: I) -> Result<&SmartHome, SmartHomeError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let script = calls
            .into_iter()
            .map(|raw| parse(raw.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(calls = script.len(), "running service calls");
        for call in script {
            self.call(call);
        }
        Ok(&self.home)
    }
}

fn parse(raw: &str) -> Result<ServiceCall, SmartHomeError> {
    raw.parse().map_err(|err| {
        tracing::warn!(%err, raw, "rejected service call");
        SmartHomeError::Validation(err)
    })
}
