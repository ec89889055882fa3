use carina_core::Result;
use carina_core::domain::compute::{AutoScalingGroup, Ec2Instance, LoadBalancer, LoadBalancerScheme};

use crate::block::Block;
use crate::resource::AnyResource;
use crate::value::Value;

use super::tf_label;

pub fn ec2_instance(resource: &AnyResource) -> Result<Vec<Block>> {
    let AnyResource::Ec2Instance(instance) = resource else {
        unreachable!("registry dispatches EC2Instance only to this mapper")
    };
    let block = Block::resource("aws_instance", tf_label(&instance.name))
        .with_attribute("ami", Value::string(&instance.ami_id))
        .with_attribute("instance_type", Value::string(&instance.instance_type))
        .with_attribute("subnet_id", Value::string(&instance.subnet_id))
        .with_optional_attribute(
            "vpc_security_group_ids",
            (!instance.security_group_ids.is_empty())
                .then(|| Value::list_of_strings(instance.security_group_ids.clone())),
        )
        .with_optional_attribute(
            "tags",
            (!instance.tags.is_empty()).then(|| {
                Value::Map(instance.tags.iter().map(|(k, v)| (k.clone(), Value::string(v))).collect())
            }),
        );
    Ok(vec![block])
}

pub fn auto_scaling_group(resource: &AnyResource) -> Result<Vec<Block>> {
    let AnyResource::AutoScalingGroup(asg) = resource else {
        unreachable!("registry dispatches AutoScalingGroup only to this mapper")
    };
    let mut block = Block::resource("aws_autoscaling_group", tf_label(&asg.name))
        .with_attribute("name", Value::string(&asg.name))
        .with_attribute("min_size", Value::Number(asg.min_size as f64))
        .with_attribute("max_size", Value::Number(asg.max_size as f64))
        .with_attribute("desired_capacity", Value::Number(asg.desired_capacity as f64))
        .with_attribute("vpc_zone_identifier", Value::list_of_strings(asg.subnet_ids.clone()));
    if let Some(launch_template_id) = &asg.launch_template_id {
        block = block.with_nested(
            Block::nested("launch_template").with_attribute("id", Value::string(launch_template_id)),
        );
    }
    Ok(vec![block])
}

pub fn load_balancer(resource: &AnyResource) -> Result<Vec<Block>> {
    let AnyResource::LoadBalancer(alb) = resource else {
        unreachable!("registry dispatches ApplicationLoadBalancer only to this mapper")
    };
    let block = Block::resource("aws_lb", tf_label(&alb.name))
        .with_attribute("name", Value::string(&alb.name))
        .with_attribute("load_balancer_type", Value::string("application"))
        .with_attribute(
            "internal",
            Value::Bool(matches!(alb.scheme, LoadBalancerScheme::Internal)),
        )
        .with_attribute("subnets", Value::list_of_strings(alb.subnet_ids.clone()))
        .with_attribute(
            "security_groups",
            Value::list_of_strings(alb.security_group_ids.clone()),
        )
        .with_optional_attribute(
            "tags",
            (!alb.tags.is_empty())
                .then(|| Value::Map(alb.tags.iter().map(|(k, v)| (k.clone(), Value::string(v))).collect())),
        );
    Ok(vec![block])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ec2_instance_mapper_uses_ami_attribute() {
        let instance = Ec2Instance::new("web-1", "ami-123", "t3.micro", "subnet-a");
        let resource = AnyResource::Ec2Instance(instance);
        let blocks = ec2_instance(&resource).unwrap();
        assert!(blocks[0].attributes.iter().any(|(k, v)| k == "ami" && *v == Value::string("ami-123")));
    }

    #[test]
    fn asg_with_launch_template_emits_a_nested_block() {
        let mut asg = AutoScalingGroup::new("web-asg", 1, 3, 2);
        asg.subnet_ids.push("subnet-a".to_string());
        asg.launch_template_id = Some("lt-123".to_string());
        let resource = AnyResource::AutoScalingGroup(asg);
        let blocks = auto_scaling_group(&resource).unwrap();
        assert_eq!(blocks[0].blocks.len(), 1);
        assert_eq!(blocks[0].blocks[0].block_type.keyword(), "launch_template");
    }

    #[test]
    fn internet_facing_alb_is_not_internal() {
        let mut alb = LoadBalancer::new("web-alb", LoadBalancerScheme::InternetFacing);
        alb.subnet_ids.push("subnet-a".to_string());
        alb.subnet_ids.push("subnet-b".to_string());
        alb.security_group_ids.push("sg-a".to_string());
        let resource = AnyResource::LoadBalancer(alb);
        let blocks = load_balancer(&resource).unwrap();
        assert!(blocks[0].attributes.iter().any(|(k, v)| k == "internal" && *v == Value::Bool(false)));
    }
}
