use chrono::{Duration, Local};
use hostid_core::{parse_ipv4, scope_of, HwAddr};

use super::remove::record_deletion;
use super::Orchestrator;
use crate::config::LaptopSlot;
use crate::error::ProvisionError;
use crate::outcome::OperationReport;
use crate::prompt::choose_container;

impl Orchestrator<'_> {
    /// Bind a loaner laptop to the lowest-numbered free pool slot.
    ///
    /// A slot is free when its reserved name no longer forward-resolves.
    /// The filter description embeds the requester and an expiry date; the
    /// date is informational only; nothing here enforces it, an external
    /// sweeper has to read it and act.
    pub fn allocate_laptop_slot(
        &self,
        name: &str,
        hwaddr: &HwAddr,
    ) -> Result<OperationReport, ProvisionError> {
        let slots = &self.settings.laptop_slots;
        if slots.is_empty() {
            return Err(ProvisionError::NotFound(
                "no laptop pool slots are configured".to_string(),
            ));
        }

        let slot = self.first_free_slot(slots)?
            .ok_or(ProvisionError::PoolExhausted(slots.len()))?;
        let address = parse_ipv4(&slot.address).map_err(|err| {
            ProvisionError::Validation(format!(
                "laptop slot '{}' has an invalid address: {err}",
                slot.name
            ))
        })?;
        let scope = scope_of(address);

        let expiry = (Local::now() + Duration::days(self.settings.laptop_lease_days))
            .format("%Y-%m-%d");
        let description = format!("loaner for {name}, expires {expiry}");

        let mut report = OperationReport::new("allocate-laptop", name);
        report.done("slot", format!("assigned '{}' ({address})", slot.name));

        match self.filter.add_allow(hwaddr, &description) {
            Ok(()) => report.done("filter entry", format!("allow {hwaddr} ({description})")),
            Err(err) => report.failed("filter entry", err.to_string()),
        }

        // A previous loaner may still hold the slot's reservation; absence
        // is expected, not an error.
        match self.stale_slot_hwaddr(&scope, address) {
            Some(old) => record_deletion(
                &mut report,
                "stale reservation",
                self.reservations.delete(&scope, address, &old),
                &format!("{address} -> {old}"),
            ),
            None => report.not_found(
                "stale reservation",
                format!("nothing bound to {address} in scope {scope}"),
            ),
        }

        match self
            .reservations
            .create(&scope, address, hwaddr, &slot.name, &description)
        {
            Ok(()) => report.done(
                "reservation",
                format!("{address} -> {hwaddr} as '{}'", slot.name),
            ),
            Err(err) => report.failed("reservation", err.to_string()),
        }

        // The identity object carries the requester's name, not the slot's.
        match choose_container(self.directory, self.prompt, self.settings, true) {
            Ok(container) => match self.directory.create(name, &container) {
                Ok(()) => report.done("identity object", format!("created under {container}")),
                Err(err) => report.failed("identity object", err.to_string()),
            },
            Err(err) => report.failed("identity object", err.to_string()),
        }

        self.rebuild_step(&mut report);
        Ok(report)
    }

    fn first_free_slot<'s>(
        &self,
        slots: &'s [LaptopSlot],
    ) -> Result<Option<&'s LaptopSlot>, ProvisionError> {
        for slot in slots {
            if self.names.resolve_forward(&slot.name)?.is_none() {
                return Ok(Some(slot));
            }
        }
        Ok(None)
    }

    fn stale_slot_hwaddr(&self, scope: &str, address: std::net::Ipv4Addr) -> Option<HwAddr> {
        match self.reservations.scope_clients(scope) {
            Ok(clients) => clients
                .into_iter()
                .find(|c| c.address == address)
                .map(|c| c.hwaddr),
            Err(err) => {
                eprintln!("warning: could not read client list for scope {scope} ({err})");
                None
            }
        }
    }
}
