use hostid_core::{parse_ipv4, reverse_zone_of, scope_of, Disposition, HwAddr};

use super::{normalize_name, HostRequest, Orchestrator};
use crate::error::ProvisionError;
use crate::outcome::OperationReport;
use crate::prompt::choose_container;

impl Orchestrator<'_> {
    /// Provision a host across all backends.
    ///
    /// Runs the pre-flight checks in a fixed order, short-circuiting on the
    /// first failure; no backend is mutated unless every check passes. The
    /// mutation phase then runs in its fixed order, recording one outcome
    /// per step and continuing past failures.
    pub fn add_host(&self, request: &HostRequest) -> Result<OperationReport, ProvisionError> {
        // Hardware-address syntax first; everything downstream uses the
        // canonical form.
        let hwaddr = HwAddr::parse(&request.hwaddr)?;

        if request.laptop {
            return self.allocate_laptop_slot(&request.name, &hwaddr);
        }

        let raw_address = request.address.as_deref().ok_or_else(|| {
            ProvisionError::Validation("an address is required unless --laptop is set".to_string())
        })?;
        let address = parse_ipv4(raw_address)?;

        let name = request.name.as_str();
        let fqdn = self.settings.fqdn(name);
        let scope = scope_of(address);
        let reverse_zone = reverse_zone_of(address);

        if let Some(existing) = self.names.resolve_forward(name)? {
            return Err(ProvisionError::Conflict(format!(
                "'{name}' already resolves to {existing}"
            )));
        }

        // The address must not belong to some other host. A reverse answer
        // equal to the literal dotted quad is the resolver's placeholder for
        // "no real PTR" and passes; an answer matching the requested name is
        // settled by the zone-authority branch below.
        let reverse_owner = self.names.resolve_reverse(address)?;
        if let Some(owner) = reverse_owner.as_deref().map(normalize_name) {
            if owner != address.to_string() && !owner.eq_ignore_ascii_case(&fqdn) {
                return Err(ProvisionError::Conflict(format!(
                    "{address} already resolves to '{owner}'"
                )));
            }
        }

        if self.directory.exists(name)? {
            return Err(ProvisionError::Conflict(format!(
                "an identity object named '{name}' already exists in the directory"
            )));
        }

        if self
            .filter
            .list()?
            .iter()
            .any(|e| e.disposition == Disposition::Allow && e.hwaddr == hwaddr)
        {
            return Err(ProvisionError::Conflict(format!(
                "an allow filter entry for {hwaddr} is already registered"
            )));
        }

        let stub_zone = self.zones.is_stub_zone(&reverse_zone)?;
        if stub_zone {
            // PTR authority lives outside our name service: the external
            // record must already point at this host before we proceed.
            match reverse_owner.as_deref().map(normalize_name) {
                Some(owner) if owner.eq_ignore_ascii_case(&fqdn) => {}
                Some(owner) if owner == address.to_string() => {
                    return Err(ProvisionError::Precondition(format!(
                        "reverse zone {reverse_zone} is a stub and {address} has no external PTR yet; create one resolving to {fqdn} first"
                    )));
                }
                None => {
                    return Err(ProvisionError::Precondition(format!(
                        "reverse zone {reverse_zone} is a stub and {address} has no external PTR yet; create one resolving to {fqdn} first"
                    )));
                }
                Some(owner) => {
                    return Err(ProvisionError::Conflict(format!(
                        "external PTR for {address} resolves to '{owner}', not {fqdn}"
                    )));
                }
            }
        }

        Ok(self.mutate_add(request, &hwaddr, address, &scope, &reverse_zone, &fqdn, stub_zone))
    }

    /// Mutation phase; pre-flight has passed. Fixed order, best effort.
    #[allow(clippy::too_many_arguments)]
    fn mutate_add(
        &self,
        request: &HostRequest,
        hwaddr: &HwAddr,
        address: std::net::Ipv4Addr,
        scope: &str,
        reverse_zone: &str,
        fqdn: &str,
        stub_zone: bool,
    ) -> OperationReport {
        let name = request.name.as_str();
        let mut report = OperationReport::new("add-host", name);

        match self.filter.add_allow(hwaddr, name) {
            Ok(()) => report.done("filter entry", format!("allow {hwaddr}")),
            Err(err) => report.failed("filter entry", err.to_string()),
        }

        // A stub zone means the external PTR already names the FQDN, so the
        // reservation binds to it; locally authoritative zones bind the
        // unqualified name.
        let bound_name = if stub_zone { fqdn } else { name };
        match self
            .reservations
            .create(scope, address, hwaddr, bound_name, name)
        {
            Ok(()) => report.done(
                "reservation",
                format!("{address} -> {hwaddr} in scope {scope}"),
            ),
            Err(err) => report.failed("reservation", err.to_string()),
        }

        match self.names.create_a(name, address) {
            Ok(()) => report.done("forward record", format!("{fqdn} -> {address}")),
            Err(err) => report.failed("forward record", err.to_string()),
        }

        if stub_zone {
            report.skipped(
                "reverse record",
                format!("{reverse_zone} is a stub; PTR is managed externally"),
            );
        } else {
            match self.names.create_ptr(fqdn, address, reverse_zone) {
                Ok(()) => report.done("reverse record", format!("{address} -> {fqdn}")),
                Err(err) => report.failed("reverse record", err.to_string()),
            }
        }

        match choose_container(self.directory, self.prompt, self.settings, false) {
            Ok(container) => match self.directory.create(name, &container) {
                Ok(()) => report.done("identity object", format!("created under {container}")),
                Err(err) => report.failed("identity object", err.to_string()),
            },
            Err(err) => report.failed("identity object", err.to_string()),
        }

        self.rebuild_step(&mut report);
        report
    }
}
