//! `ComputeProvider` backed by [`crate::state::MockState`].

use carina_aws_types::Arn;
use carina_core::error::{Error, Result};
use carina_provider_protocol::Envelope;
use carina_provider_protocol::mappers::compute::{
    AutoScalingGroupInput, AutoScalingGroupOutput, Ec2InstanceInput, Ec2InstanceOutput,
    LoadBalancerInput, LoadBalancerOutput,
};
use carina_provider_protocol::provider::ComputeProvider;

use crate::{MockProvider, clock, ids};

impl ComputeProvider for MockProvider {
    fn run_instance(&self, input: &Ec2InstanceInput) -> Result<Ec2InstanceOutput> {
        let id = ids::hyphenated("i", "Ec2Instance", &input.name);
        let arn = Arn::build("ec2", &self.state.region, &self.state.account_id, "instance", "", &id);
        let suffix = ids::numeric_suffix(&id);
        let output = Ec2InstanceOutput {
            envelope: Envelope::new(id.clone(), arn, "running", clock::now()),
            private_ip: format!("10.0.{}.{}", (suffix / 256) % 256, suffix % 256),
        };
        self.state.store.lock().unwrap().instances.insert(id, output.clone());
        Ok(output)
    }

    fn terminate_instance(&self, id: &str) -> Result<()> {
        self.state
            .store
            .lock()
            .unwrap()
            .instances
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("instance {id}")))
    }

    fn create_auto_scaling_group(&self, input: &AutoScalingGroupInput) -> Result<AutoScalingGroupOutput> {
        let arn = Arn::build(
            "autoscaling",
            &self.state.region,
            &self.state.account_id,
            "autoScalingGroup",
            "",
            &input.name,
        );
        let output = AutoScalingGroupOutput {
            envelope: Envelope::new(input.name.clone(), arn, "active", clock::now()),
        };
        self.state
            .store
            .lock()
            .unwrap()
            .autoscaling_groups
            .insert(input.name.clone(), output.clone());
        Ok(output)
    }

    fn delete_auto_scaling_group(&self, name: &str) -> Result<()> {
        self.state
            .store
            .lock()
            .unwrap()
            .autoscaling_groups
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("auto scaling group {name}")))
    }

    fn create_load_balancer(&self, input: &LoadBalancerInput) -> Result<LoadBalancerOutput> {
        let id = ids::hyphenated("alb", "LoadBalancer", &input.name);
        let arn = Arn::build(
            "elasticloadbalancing",
            &self.state.region,
            &self.state.account_id,
            "loadbalancer",
            "",
            &id,
        );
        let suffix = ids::numeric_suffix(&id);
        let output = LoadBalancerOutput {
            envelope: Envelope::new(arn.clone(), arn.clone(), "active", clock::now()),
            dns_name: format!("{}-{suffix:x}.{}.elb.amazonaws.com", input.name, self.state.region),
        };
        self.state.store.lock().unwrap().load_balancers.insert(arn, output.clone());
        Ok(output)
    }

    fn delete_load_balancer(&self, arn: &str) -> Result<()> {
        self.state
            .store
            .lock()
            .unwrap()
            .load_balancers
            .remove(arn)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("load balancer {arn}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carina_core::domain::Tags;
    use carina_provider_protocol::mappers::compute::Scheme;

    #[test]
    fn run_instance_derives_a_private_ip() {
        let p = MockProvider::new();
        let output = p
            .run_instance(&Ec2InstanceInput {
                name: "web-1".to_string(),
                image_id: "ami-123".to_string(),
                instance_type: "t3.micro".to_string(),
                subnet_id: "subnet-a".to_string(),
                security_group_ids: Vec::new(),
                tags: Tags::new(),
            })
            .unwrap();
        assert!(output.envelope.id.starts_with("i-"));
        assert!(!output.private_ip.is_empty());
    }

    #[test]
    fn load_balancer_is_keyed_by_its_own_arn() {
        let p = MockProvider::new();
        let output = p
            .create_load_balancer(&LoadBalancerInput {
                name: "web-alb".to_string(),
                scheme: Scheme::InternetFacing,
                subnets: Vec::new(),
                security_groups: Vec::new(),
                load_balancer_type: "application".to_string(),
                tags: Tags::new(),
            })
            .unwrap();
        p.delete_load_balancer(&output.envelope.arn).unwrap();
    }
}
