//! `NetworkingProvider` backed by [`crate::state::MockState`].

use carina_aws_types::Arn;
use carina_core::error::{Error, Result};
use carina_provider_protocol::Envelope;
use carina_provider_protocol::mappers::elastic_ip::{ElasticIpInput, ElasticIpOutput};
use carina_provider_protocol::mappers::gateway::{
    InternetGatewayInput, InternetGatewayOutput, NatGatewayInput, NatGatewayOutput,
};
use carina_provider_protocol::mappers::network_acl::{NetworkAclInput, NetworkAclOutput};
use carina_provider_protocol::mappers::network_interface::{
    NetworkInterfaceInput, NetworkInterfaceOutput,
};
use carina_provider_protocol::mappers::route_table::{RouteTableInput, RouteTableOutput};
use carina_provider_protocol::mappers::security_group::{SecurityGroupInput, SecurityGroupOutput};
use carina_provider_protocol::mappers::subnet::{SubnetInput, SubnetOutput};
use carina_provider_protocol::mappers::vpc::{VpcInput, VpcOutput};
use carina_provider_protocol::mappers::vpc_endpoint::{VpcEndpointInput, VpcEndpointOutput};
use carina_provider_protocol::provider::NetworkingProvider;

use crate::{MockProvider, clock, ids};

impl NetworkingProvider for MockProvider {
    fn create_vpc(&self, input: &VpcInput) -> Result<VpcOutput> {
        let id = ids::hyphenated("vpc", "Vpc", &input.name);
        let arn = Arn::build("ec2", &input.region, &self.state.account_id, "vpc", "", &id);
        let output = VpcOutput {
            envelope: Envelope::new(id.clone(), arn, "available", clock::now()),
        };
        self.state.store.lock().unwrap().vpcs.insert(id, output.clone());
        Ok(output)
    }

    fn get_vpc(&self, id: &str) -> Result<VpcOutput> {
        self.state
            .store
            .lock()
            .unwrap()
            .vpcs
            .get(id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("vpc {id}")))
    }

    fn delete_vpc(&self, id: &str) -> Result<()> {
        self.state
            .store
            .lock()
            .unwrap()
            .vpcs
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("vpc {id}")))
    }

    fn create_subnet(&self, input: &SubnetInput) -> Result<SubnetOutput> {
        let id = ids::hyphenated("subnet", "Subnet", &input.name);
        let arn = Arn::build("ec2", &self.state.region, &self.state.account_id, "subnet", "", &id);
        let output = SubnetOutput {
            envelope: Envelope::new(id.clone(), arn, "available", clock::now()),
            route_table_id: String::new(),
        };
        self.state.store.lock().unwrap().subnets.insert(id, output.clone());
        Ok(output)
    }

    fn get_subnet(&self, id: &str) -> Result<SubnetOutput> {
        self.state
            .store
            .lock()
            .unwrap()
            .subnets
            .get(id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("subnet {id}")))
    }

    fn delete_subnet(&self, id: &str) -> Result<()> {
        self.state
            .store
            .lock()
            .unwrap()
            .subnets
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("subnet {id}")))
    }

    fn create_internet_gateway(&self, input: &InternetGatewayInput) -> Result<InternetGatewayOutput> {
        let id = ids::hyphenated("igw", "InternetGateway", &input.name);
        let arn = Arn::build(
            "ec2",
            &self.state.region,
            &self.state.account_id,
            "internet-gateway",
            "",
            &id,
        );
        let output = InternetGatewayOutput {
            envelope: Envelope::new(id.clone(), arn, "available", clock::now()),
            attachment_state: "detached".to_string(),
        };
        self.state
            .store
            .lock()
            .unwrap()
            .internet_gateways
            .insert(id, output.clone());
        Ok(output)
    }

    fn attach_internet_gateway(&self, igw_id: &str, vpc_id: &str) -> Result<()> {
        let mut store = self.state.store.lock().unwrap();
        if !store.internet_gateways.contains_key(igw_id) {
            return Err(Error::not_found(format!("internet gateway {igw_id}")));
        }
        if let Some(existing) = store.igw_attachments.get(igw_id) {
            if existing != vpc_id {
                return Err(Error::provider_call(
                    "internet gateway already attached to a different vpc",
                ));
            }
        }
        store.igw_attachments.insert(igw_id.to_string(), vpc_id.to_string());
        if let Some(igw) = store.internet_gateways.get_mut(igw_id) {
            igw.attachment_state = "attached".to_string();
        }
        Ok(())
    }

    fn detach_internet_gateway(&self, igw_id: &str, vpc_id: &str) -> Result<()> {
        let mut store = self.state.store.lock().unwrap();
        match store.igw_attachments.get(igw_id) {
            Some(attached_to) if attached_to == vpc_id => {
                store.igw_attachments.remove(igw_id);
                if let Some(igw) = store.internet_gateways.get_mut(igw_id) {
                    igw.attachment_state = "detached".to_string();
                }
                Ok(())
            }
            _ => Err(Error::provider_call(
                "internet gateway is not attached to that vpc",
            )),
        }
    }

    fn create_nat_gateway(&self, input: &NatGatewayInput) -> Result<NatGatewayOutput> {
        let id = ids::hyphenated("nat", "NatGateway", &input.name);
        let arn = Arn::build("ec2", &self.state.region, &self.state.account_id, "natgateway", "", &id);
        let output = NatGatewayOutput {
            envelope: Envelope::new(id.clone(), arn, "available", clock::now()),
        };
        self.state.store.lock().unwrap().nat_gateways.insert(id, output.clone());
        Ok(output)
    }

    fn delete_nat_gateway(&self, id: &str) -> Result<()> {
        self.state
            .store
            .lock()
            .unwrap()
            .nat_gateways
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("nat gateway {id}")))
    }

    fn create_route_table(&self, input: &RouteTableInput) -> Result<RouteTableOutput> {
        let id = ids::hyphenated("rtb", "RouteTable", &input.name);
        let arn = Arn::build("ec2", &self.state.region, &self.state.account_id, "route-table", "", &id);
        let output = RouteTableOutput {
            envelope: Envelope::new(id.clone(), arn, "available", clock::now()),
            associated_subnet_ids: Vec::new(),
        };
        self.state.store.lock().unwrap().route_tables.insert(id, output.clone());
        Ok(output)
    }

    fn associate_route_table(&self, route_table_id: &str, subnet_id: &str) -> Result<()> {
        let mut store = self.state.store.lock().unwrap();
        if !store.route_tables.contains_key(route_table_id) {
            return Err(Error::not_found(format!("route table {route_table_id}")));
        }
        if let Some(existing) = store.route_table_associations.get(subnet_id) {
            if existing != route_table_id {
                log::warn!(
                    "rejecting route table association: subnet {subnet_id} already associated with {existing}"
                );
                return Err(Error::provider_validation(
                    "subnet is already associated with a different route table",
                ));
            }
            return Ok(());
        }
        store
            .route_table_associations
            .insert(subnet_id.to_string(), route_table_id.to_string());
        if let Some(rt) = store.route_tables.get_mut(route_table_id) {
            rt.associated_subnet_ids.push(subnet_id.to_string());
        }
        Ok(())
    }

    fn disassociate_route_table(&self, route_table_id: &str, subnet_id: &str) -> Result<()> {
        let mut store = self.state.store.lock().unwrap();
        match store.route_table_associations.get(subnet_id) {
            Some(rt) if rt == route_table_id => {
                store.route_table_associations.remove(subnet_id);
                if let Some(rt) = store.route_tables.get_mut(route_table_id) {
                    rt.associated_subnet_ids.retain(|s| s != subnet_id);
                }
                Ok(())
            }
            _ => Err(Error::provider_call(
                "subnet is not associated with that route table",
            )),
        }
    }

    fn create_security_group(&self, input: &SecurityGroupInput) -> Result<SecurityGroupOutput> {
        let id = ids::hyphenated("sg", "SecurityGroup", &input.name);
        let arn = Arn::build(
            "ec2",
            &self.state.region,
            &self.state.account_id,
            "security-group",
            "",
            &id,
        );
        let output = SecurityGroupOutput {
            envelope: Envelope::new(id.clone(), arn, "available", clock::now()),
        };
        self.state
            .store
            .lock()
            .unwrap()
            .security_groups
            .insert(id, output.clone());
        Ok(output)
    }

    fn get_security_group(&self, id: &str) -> Result<SecurityGroupOutput> {
        self.state
            .store
            .lock()
            .unwrap()
            .security_groups
            .get(id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("security group {id}")))
    }

    fn delete_security_group(&self, id: &str) -> Result<()> {
        self.state
            .store
            .lock()
            .unwrap()
            .security_groups
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("security group {id}")))
    }

    fn create_network_acl(&self, input: &NetworkAclInput) -> Result<NetworkAclOutput> {
        let id = ids::hyphenated("acl", "NetworkAcl", &input.name);
        let arn = Arn::build("ec2", &self.state.region, &self.state.account_id, "network-acl", "", &id);
        let output = NetworkAclOutput {
            envelope: Envelope::new(id.clone(), arn, "available", clock::now()),
            associated_subnet_ids: Vec::new(),
        };
        self.state.store.lock().unwrap().network_acls.insert(id, output.clone());
        Ok(output)
    }

    fn associate_network_acl(&self, acl_id: &str, subnet_id: &str) -> Result<()> {
        let mut store = self.state.store.lock().unwrap();
        if !store.network_acls.contains_key(acl_id) {
            return Err(Error::not_found(format!("network acl {acl_id}")));
        }
        if let Some(existing) = store.acl_associations.get(subnet_id) {
            if existing != acl_id {
                log::warn!(
                    "rejecting network acl association: subnet {subnet_id} already associated with {existing}"
                );
                return Err(Error::provider_validation(
                    "subnet is already associated with a different network acl",
                ));
            }
            return Ok(());
        }
        store.acl_associations.insert(subnet_id.to_string(), acl_id.to_string());
        if let Some(acl) = store.network_acls.get_mut(acl_id) {
            acl.associated_subnet_ids.push(subnet_id.to_string());
        }
        Ok(())
    }

    fn allocate_elastic_ip(&self, input: &ElasticIpInput) -> Result<ElasticIpOutput> {
        let id = ids::hyphenated("eipalloc", "ElasticIp", &input.existing_allocation_id);
        let arn = Arn::build("ec2", &self.state.region, &self.state.account_id, "elastic-ip", "", &id);
        let suffix = ids::numeric_suffix(&id);
        let output = ElasticIpOutput {
            envelope: Envelope::new(id.clone(), arn, "available", clock::now()),
            public_ip: format!("203.0.113.{}", suffix % 256),
        };
        self.state.store.lock().unwrap().elastic_ips.insert(id, output.clone());
        Ok(output)
    }

    fn release_elastic_ip(&self, id: &str) -> Result<()> {
        self.state
            .store
            .lock()
            .unwrap()
            .elastic_ips
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("elastic ip {id}")))
    }

    fn create_network_interface(&self, input: &NetworkInterfaceInput) -> Result<NetworkInterfaceOutput> {
        let id = ids::hyphenated("eni", "NetworkInterface", &input.subnet_id);
        let arn = Arn::build(
            "ec2",
            &self.state.region,
            &self.state.account_id,
            "network-interface",
            "",
            &id,
        );
        let suffix = ids::numeric_suffix(&id);
        let output = NetworkInterfaceOutput {
            envelope: Envelope::new(id.clone(), arn, "available", clock::now()),
            attachment_id: format!("eni-attach-{suffix:x}"),
        };
        self.state
            .store
            .lock()
            .unwrap()
            .network_interfaces
            .insert(id, output.clone());
        Ok(output)
    }

    fn delete_network_interface(&self, id: &str) -> Result<()> {
        self.state
            .store
            .lock()
            .unwrap()
            .network_interfaces
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("network interface {id}")))
    }

    fn create_vpc_endpoint(&self, input: &VpcEndpointInput) -> Result<VpcEndpointOutput> {
        let id = ids::hyphenated("vpce", "VpcEndpoint", &input.name);
        let arn = Arn::build("ec2", &self.state.region, &self.state.account_id, "vpc-endpoint", "", &id);
        let output = VpcEndpointOutput {
            envelope: Envelope::new(id.clone(), arn, "available", clock::now()),
        };
        self.state.store.lock().unwrap().vpc_endpoints.insert(id, output.clone());
        Ok(output)
    }

    fn delete_vpc_endpoint(&self, id: &str) -> Result<()> {
        self.state
            .store
            .lock()
            .unwrap()
            .vpc_endpoints
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("vpc endpoint {id}")))
    }
}
