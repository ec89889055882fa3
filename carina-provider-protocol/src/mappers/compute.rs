use crate::envelope::Envelope;
use carina_core::domain::Tags;
use carina_core::domain::compute::{AutoScalingGroup, Ec2Instance, LoadBalancer, LoadBalancerScheme};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ec2InstanceInput {
    pub name: String,
    pub image_id: String,
    pub instance_type: String,
    pub subnet_id: String,
    pub security_group_ids: Vec<String>,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ec2InstanceOutput {
    pub envelope: Envelope,
    pub private_ip: String,
}

pub fn ec2_from_domain(instance: &Ec2Instance) -> Ec2InstanceInput {
    Ec2InstanceInput {
        name: instance.name.clone(),
        image_id: instance.ami_id.clone(),
        instance_type: instance.instance_type.clone(),
        subnet_id: instance.subnet_id.clone(),
        security_group_ids: instance.security_group_ids.clone(),
        tags: carina_core::domain::tags::with_name_tag(&instance.tags, &instance.name),
    }
}

pub fn ec2_to_domain_from_output(input: &Ec2InstanceInput, output: &Ec2InstanceOutput) -> Ec2Instance {
    Ec2Instance {
        name: input.name.clone(),
        ami_id: input.image_id.clone(),
        instance_type: input.instance_type.clone(),
        subnet_id: input.subnet_id.clone(),
        security_group_ids: input.security_group_ids.clone(),
        tags: input.tags.clone(),
        arn: output.envelope.lifted_arn(),
        id: Some(output.envelope.id.clone()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoScalingGroupInput {
    pub name: String,
    pub min_size: u32,
    pub max_size: u32,
    pub desired_capacity: u32,
    pub vpc_zone_identifiers: Vec<String>,
    pub launch_template_id: String,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoScalingGroupOutput {
    pub envelope: Envelope,
}

pub fn asg_from_domain(asg: &AutoScalingGroup) -> AutoScalingGroupInput {
    AutoScalingGroupInput {
        name: asg.name.clone(),
        min_size: asg.min_size,
        max_size: asg.max_size,
        desired_capacity: asg.desired_capacity,
        vpc_zone_identifiers: asg.subnet_ids.clone(),
        launch_template_id: asg.launch_template_id.clone().unwrap_or_default(),
        tags: carina_core::domain::tags::with_name_tag(&asg.tags, &asg.name),
    }
}

pub fn asg_to_domain_from_output(
    input: &AutoScalingGroupInput,
    output: &AutoScalingGroupOutput,
) -> AutoScalingGroup {
    AutoScalingGroup {
        name: input.name.clone(),
        min_size: input.min_size,
        max_size: input.max_size,
        desired_capacity: input.desired_capacity,
        subnet_ids: input.vpc_zone_identifiers.clone(),
        launch_template_id: if input.launch_template_id.is_empty() {
            None
        } else {
            Some(input.launch_template_id.clone())
        },
        tags: input.tags.clone(),
        arn: output.envelope.lifted_arn(),
        id: Some(output.envelope.id.clone()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scheme {
    InternetFacing,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerInput {
    pub name: String,
    pub scheme: Scheme,
    pub subnets: Vec<String>,
    pub security_groups: Vec<String>,
    pub load_balancer_type: String,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerOutput {
    pub envelope: Envelope,
    pub dns_name: String,
}

pub fn alb_from_domain(alb: &LoadBalancer) -> LoadBalancerInput {
    LoadBalancerInput {
        name: alb.name.clone(),
        scheme: match alb.scheme {
            LoadBalancerScheme::InternetFacing => Scheme::InternetFacing,
            LoadBalancerScheme::Internal => Scheme::Internal,
        },
        subnets: alb.subnet_ids.clone(),
        security_groups: alb.security_group_ids.clone(),
        load_balancer_type: "application".to_string(),
        tags: carina_core::domain::tags::with_name_tag(&alb.tags, &alb.name),
    }
}

pub fn alb_to_domain_from_output(input: &LoadBalancerInput, output: &LoadBalancerOutput) -> LoadBalancer {
    LoadBalancer {
        name: input.name.clone(),
        scheme: match input.scheme {
            Scheme::InternetFacing => LoadBalancerScheme::InternetFacing,
            Scheme::Internal => LoadBalancerScheme::Internal,
        },
        subnet_ids: input.subnets.clone(),
        security_group_ids: input.security_groups.clone(),
        tags: input.tags.clone(),
        arn: output.envelope.lifted_arn(),
        id: Some(output.envelope.id.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ec2_renames_ami_id_to_image_id() {
        let instance = Ec2Instance::new("web-1", "ami-123", "t3.micro", "subnet-a");
        let input = ec2_from_domain(&instance);
        assert_eq!(input.image_id, "ami-123");
    }

    #[test]
    fn asg_launch_template_absent_stays_absent() {
        let asg = AutoScalingGroup::new("web-asg", 1, 3, 2);
        let input = asg_from_domain(&asg);
        let output = AutoScalingGroupOutput {
            envelope: Envelope::new("asg-1", "", "available", 0),
        };
        let lifted = asg_to_domain_from_output(&input, &output);
        assert_eq!(lifted.launch_template_id, None);
    }

    #[test]
    fn alb_scheme_round_trips() {
        let alb = LoadBalancer::new("web-alb", LoadBalancerScheme::Internal);
        let input = alb_from_domain(&alb);
        let output = LoadBalancerOutput {
            envelope: Envelope::new("alb-1", "", "active", 0),
            dns_name: "web-alb-123.us-east-1.elb.amazonaws.com".to_string(),
        };
        let lifted = alb_to_domain_from_output(&input, &output);
        assert_eq!(lifted.scheme, LoadBalancerScheme::Internal);
    }
}
