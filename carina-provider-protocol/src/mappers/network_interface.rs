use crate::envelope::Envelope;
use carina_core::domain::network_interface::NetworkInterface;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkInterfaceInput {
    pub subnet_id: String,
    pub groups: Vec<String>,
    pub private_ip_address: String,
    pub associate_public_ip_address: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkInterfaceOutput {
    pub envelope: Envelope,
    pub attachment_id: String,
}

pub fn from_domain(eni: &NetworkInterface) -> NetworkInterfaceInput {
    NetworkInterfaceInput {
        subnet_id: eni.subnet_id.clone(),
        groups: eni.security_group_ids.clone(),
        private_ip_address: eni.private_ip.clone().unwrap_or_default(),
        associate_public_ip_address: eni.auto_assign_ip,
    }
}

pub fn to_domain_from_output(
    input: &NetworkInterfaceInput,
    output: &NetworkInterfaceOutput,
) -> NetworkInterface {
    NetworkInterface {
        subnet_id: input.subnet_id.clone(),
        security_group_ids: input.groups.clone(),
        private_ip: if input.private_ip_address.is_empty() {
            None
        } else {
            Some(input.private_ip_address.clone())
        },
        auto_assign_ip: input.associate_public_ip_address,
        arn: output.envelope.lifted_arn(),
        id: Some(output.envelope.id.clone()),
    }
}
