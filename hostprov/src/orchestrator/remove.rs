use hostid_core::{reverse_zone_of, scope_of};

use super::Orchestrator;
use crate::backend::BackendError;
use crate::error::ProvisionError;
use crate::outcome::OperationReport;

impl Orchestrator<'_> {
    /// Decommission a host: reverse every provisioning step, tolerating
    /// backends that have already lost their half of the record.
    ///
    /// The five deletions are independent of one another; each reports
    /// deleted / not found / failed on its own and the whole operation
    /// always returns the itemized list. Removal is destructive, so it asks
    /// for confirmation unless the caller suppresses it.
    pub fn remove_host(
        &self,
        name: &str,
        require_confirmation: bool,
    ) -> Result<OperationReport, ProvisionError> {
        let address = self.names.resolve_forward(name)?.ok_or_else(|| {
            ProvisionError::NotFound(format!("'{name}' does not resolve to an address"))
        })?;
        let scope = scope_of(address);
        let reverse_zone = reverse_zone_of(address);

        if require_confirmation
            && !self
                .prompt
                .confirm(&format!("remove host '{name}' ({address})?"))?
        {
            return Err(ProvisionError::Cancelled);
        }

        // The bound hardware address is only discoverable through the scope
        // client list; without it the filter and reservation cleanups are
        // skipped and reported, not failed.
        let hwaddr = match self.reservations.scope_clients(&scope) {
            Ok(clients) => clients
                .into_iter()
                .find(|c| c.address == address)
                .map(|c| c.hwaddr),
            Err(err) => {
                eprintln!("warning: could not read client list for scope {scope} ({err})");
                None
            }
        };

        let mut report = OperationReport::new("remove-host", name);

        record_deletion(
            &mut report,
            "forward record",
            self.names.delete_a(name),
            &format!("{name} -> {address}"),
        );
        record_deletion(
            &mut report,
            "reverse record",
            self.names.delete_ptr(address, &reverse_zone),
            &format!("{address} in {reverse_zone}"),
        );

        match &hwaddr {
            Some(hw) => {
                record_deletion(
                    &mut report,
                    "reservation",
                    self.reservations.delete(&scope, address, hw),
                    &format!("{address} in scope {scope}"),
                );
            }
            None => report.skipped(
                "reservation",
                format!("no client matching {address} in scope {scope}"),
            ),
        }

        record_deletion(
            &mut report,
            "identity object",
            self.directory.delete_recursive(name),
            &format!("'{name}' and any children"),
        );

        match &hwaddr {
            Some(hw) => {
                record_deletion(
                    &mut report,
                    "filter entry",
                    self.filter.delete_entry(hw),
                    &hw.canonical(),
                );
            }
            None => report.skipped("filter entry", "hardware address unknown"),
        }

        self.rebuild_step(&mut report);
        Ok(report)
    }
}

pub(super) fn record_deletion(
    report: &mut OperationReport,
    step: &str,
    result: Result<bool, BackendError>,
    what: &str,
) {
    match result {
        Ok(true) => report.done(step, format!("deleted {what}")),
        Ok(false) => report.not_found(step, format!("{what} was not present")),
        Err(err) => report.failed(step, err.to_string()),
    }
}
