//! Compute family: EC2 instances, Auto Scaling Groups, and Application Load Balancers.
//!
//! Lighter-weight than the networking/IAM families: these resource
//! kinds are part of the modeler's surface but don't carry detailed
//! per-field invariants the way networking and IAM do, so validation
//! here covers only what is structurally implied (non-empty
//! identifiers, capacity ordering).

use crate::domain::{DomainEntity, Tags};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Ec2Instance {
    pub name: String,
    pub ami_id: String,
    pub instance_type: String,
    pub subnet_id: String,
    pub security_group_ids: Vec<String>,
    pub tags: Tags,
    pub arn: Option<String>,
    pub id: Option<String>,
}

impl Ec2Instance {
    pub fn new(
        name: impl Into<String>,
        ami_id: impl Into<String>,
        instance_type: impl Into<String>,
        subnet_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ami_id: ami_id.into(),
            instance_type: instance_type.into(),
            subnet_id: subnet_id.into(),
            security_group_ids: Vec::new(),
            tags: Tags::new(),
            arn: None,
            id: None,
        }
    }
}

impl DomainEntity for Ec2Instance {
    fn kind(&self) -> &'static str {
        "EC2Instance"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn vpc_id(&self) -> Option<&str> {
        None
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::domain_validation("ec2 instance name must not be empty"));
        }
        if self.ami_id.is_empty() {
            return Err(Error::domain_validation("ec2 instance amiID must not be empty"));
        }
        if self.instance_type.is_empty() {
            return Err(Error::domain_validation(
                "ec2 instance instanceType must not be empty",
            ));
        }
        if self.subnet_id.is_empty() {
            return Err(Error::domain_validation(
                "ec2 instance subnetID must not be empty",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AutoScalingGroup {
    pub name: String,
    pub min_size: u32,
    pub max_size: u32,
    pub desired_capacity: u32,
    pub subnet_ids: Vec<String>,
    pub launch_template_id: Option<String>,
    pub tags: Tags,
    pub arn: Option<String>,
    pub id: Option<String>,
}

impl AutoScalingGroup {
    pub fn new(name: impl Into<String>, min_size: u32, max_size: u32, desired_capacity: u32) -> Self {
        Self {
            name: name.into(),
            min_size,
            max_size,
            desired_capacity,
            subnet_ids: Vec::new(),
            launch_template_id: None,
            tags: Tags::new(),
            arn: None,
            id: None,
        }
    }
}

impl DomainEntity for AutoScalingGroup {
    fn kind(&self) -> &'static str {
        "AutoScalingGroup"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn vpc_id(&self) -> Option<&str> {
        None
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::domain_validation("asg name must not be empty"));
        }
        if self.subnet_ids.is_empty() {
            return Err(Error::domain_validation("asg subnetIDs must not be empty"));
        }
        if self.min_size > self.max_size {
            return Err(Error::domain_validation("asg minSize must be <= maxSize"));
        }
        if self.desired_capacity < self.min_size || self.desired_capacity > self.max_size {
            return Err(Error::domain_validation(
                "asg desiredCapacity must be between minSize and maxSize",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadBalancerScheme {
    InternetFacing,
    Internal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadBalancer {
    pub name: String,
    pub scheme: LoadBalancerScheme,
    pub subnet_ids: Vec<String>,
    pub security_group_ids: Vec<String>,
    pub tags: Tags,
    pub arn: Option<String>,
    pub id: Option<String>,
}

impl LoadBalancer {
    pub fn new(name: impl Into<String>, scheme: LoadBalancerScheme) -> Self {
        Self {
            name: name.into(),
            scheme,
            subnet_ids: Vec::new(),
            security_group_ids: Vec::new(),
            tags: Tags::new(),
            arn: None,
            id: None,
        }
    }
}

impl DomainEntity for LoadBalancer {
    fn kind(&self) -> &'static str {
        "ApplicationLoadBalancer"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn vpc_id(&self) -> Option<&str> {
        None
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::domain_validation("load balancer name must not be empty"));
        }
        if self.subnet_ids.len() < 2 {
            return Err(Error::domain_validation(
                "application load balancer requires at least 2 subnets",
            ));
        }
        if self.security_group_ids.is_empty() {
            return Err(Error::domain_validation(
                "load balancer requires at least one security group",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_ec2_instance_passes() {
        let instance = Ec2Instance::new("web-1", "ami-123", "t3.micro", "subnet-a");
        assert!(instance.validate().is_ok());
    }

    #[test]
    fn ec2_instance_missing_ami_fails() {
        let instance = Ec2Instance::new("web-1", "", "t3.micro", "subnet-a");
        assert!(instance.validate().is_err());
    }

    #[test]
    fn valid_asg_passes() {
        let mut asg = AutoScalingGroup::new("web-asg", 1, 3, 2);
        asg.subnet_ids.push("subnet-a".to_string());
        assert!(asg.validate().is_ok());
    }

    #[test]
    fn asg_desired_outside_bounds_fails() {
        let mut asg = AutoScalingGroup::new("web-asg", 1, 3, 5);
        asg.subnet_ids.push("subnet-a".to_string());
        assert!(asg.validate().is_err());
    }

    #[test]
    fn asg_min_greater_than_max_fails() {
        let mut asg = AutoScalingGroup::new("web-asg", 5, 1, 1);
        asg.subnet_ids.push("subnet-a".to_string());
        assert!(asg.validate().is_err());
    }

    #[test]
    fn valid_alb_passes() {
        let mut alb = LoadBalancer::new("web-alb", LoadBalancerScheme::InternetFacing);
        alb.subnet_ids.push("subnet-a".to_string());
        alb.subnet_ids.push("subnet-b".to_string());
        alb.security_group_ids.push("sg-a".to_string());
        assert!(alb.validate().is_ok());
    }

    #[test]
    fn alb_with_single_subnet_fails() {
        let mut alb = LoadBalancer::new("web-alb", LoadBalancerScheme::Internal);
        alb.subnet_ids.push("subnet-a".to_string());
        alb.security_group_ids.push("sg-a".to_string());
        assert!(alb.validate().is_err());
    }
}
