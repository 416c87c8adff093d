//! Product taxonomy: categories, tags, attributes and attribute terms.

use super::descriptor::{Family, MethodDescriptor, ParamSpec};

pub(super) const DESCRIPTORS: &[MethodDescriptor] = &[
    // Categories
    MethodDescriptor::create(
        "create_product_category",
        "Creates a product category",
        Family::Store,
        "products/categories",
        &[ParamSpec::payload("categoryData", "Category fields, e.g. name, parent")],
        "product_categories",
    ),
    MethodDescriptor::list(
        "get_product_categories",
        "Lists product categories",
        Family::Store,
        "products/categories",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_product_category",
        "Fetches a single product category",
        Family::Store,
        "products/categories/{categoryId}",
        &[ParamSpec::id("categoryId", "Category ID")],
    ),
    MethodDescriptor::update(
        "update_product_category",
        "Updates a product category",
        Family::Store,
        "products/categories/{categoryId}",
        &[
            ParamSpec::id("categoryId", "Category ID"),
            ParamSpec::payload("categoryData", "Category fields to change"),
        ],
        "product_categories",
    ),
    MethodDescriptor::remove(
        "delete_product_category",
        "Deletes a product category",
        Family::Store,
        "products/categories/{categoryId}",
        &[
            ParamSpec::id("categoryId", "Category ID"),
            ParamSpec::field("force", "force", "boolean", "Bypass trash and delete permanently"),
        ],
        "product_categories",
    ),
    // Tags
    MethodDescriptor::create(
        "create_product_tag",
        "Creates a product tag",
        Family::Store,
        "products/tags",
        &[ParamSpec::payload("tagData", "Tag fields, e.g. name")],
        "product_tags",
    ),
    MethodDescriptor::list(
        "get_product_tags",
        "Lists product tags",
        Family::Store,
        "products/tags",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_product_tag",
        "Fetches a single product tag",
        Family::Store,
        "products/tags/{tagId}",
        &[ParamSpec::id("tagId", "Tag ID")],
    ),
    MethodDescriptor::update(
        "update_product_tag",
        "Updates a product tag",
        Family::Store,
        "products/tags/{tagId}",
        &[
            ParamSpec::id("tagId", "Tag ID"),
            ParamSpec::payload("tagData", "Tag fields to change"),
        ],
        "product_tags",
    ),
    MethodDescriptor::remove(
        "delete_product_tag",
        "Deletes a product tag",
        Family::Store,
        "products/tags/{tagId}",
        &[
            ParamSpec::id("tagId", "Tag ID"),
            ParamSpec::field("force", "force", "boolean", "Bypass trash and delete permanently"),
        ],
        "product_tags",
    ),
    // Attributes
    MethodDescriptor::create(
        "create_product_attribute",
        "Creates a global product attribute",
        Family::Store,
        "products/attributes",
        &[ParamSpec::payload("attributeData", "Attribute fields, e.g. name, type")],
        "product_attributes",
    ),
    MethodDescriptor::list(
        "get_product_attributes",
        "Lists global product attributes",
        Family::Store,
        "products/attributes",
        &[],
    ),
    MethodDescriptor::fetch(
        "get_product_attribute",
        "Fetches a single product attribute",
        Family::Store,
        "products/attributes/{attributeId}",
        &[ParamSpec::id("attributeId", "Attribute ID")],
    ),
    MethodDescriptor::update(
        "update_product_attribute",
        "Updates a product attribute",
        Family::Store,
        "products/attributes/{attributeId}",
        &[
            ParamSpec::id("attributeId", "Attribute ID"),
            ParamSpec::payload("attributeData", "Attribute fields to change"),
        ],
        "product_attributes",
    ),
    MethodDescriptor::remove(
        "delete_product_attribute",
        "Deletes a product attribute",
        Family::Store,
        "products/attributes/{attributeId}",
        &[
            ParamSpec::id("attributeId", "Attribute ID"),
            ParamSpec::field("force", "force", "boolean", "Bypass trash and delete permanently"),
        ],
        "product_attributes",
    ),
    // Attribute terms
    MethodDescriptor::create(
        "create_attribute_term",
        "Creates a term under an attribute",
        Family::Store,
        "products/attributes/{attributeId}/terms",
        &[
            ParamSpec::id("attributeId", "Parent attribute ID"),
            ParamSpec::payload("termData", "Term fields, e.g. name"),
        ],
        "attribute_terms",
    ),
    MethodDescriptor::list(
        "get_attribute_terms",
        "Lists the terms of an attribute",
        Family::Store,
        "products/attributes/{attributeId}/terms",
        &[ParamSpec::id("attributeId", "Parent attribute ID")],
    ),
    MethodDescriptor::fetch(
        "get_attribute_term",
        "Fetches a single attribute term",
        Family::Store,
        "products/attributes/{attributeId}/terms/{termId}",
        &[
            ParamSpec::id("attributeId", "Parent attribute ID"),
            ParamSpec::id("termId", "Term ID"),
        ],
    ),
    MethodDescriptor::update(
        "update_attribute_term",
        "Updates an attribute term",
        Family::Store,
        "products/attributes/{attributeId}/terms/{termId}",
        &[
            ParamSpec::id("attributeId", "Parent attribute ID"),
            ParamSpec::id("termId", "Term ID"),
            ParamSpec::payload("termData", "Term fields to change"),
        ],
        "attribute_terms",
    ),
    MethodDescriptor::remove(
        "delete_attribute_term",
        "Deletes an attribute term",
        Family::Store,
        "products/attributes/{attributeId}/terms/{termId}",
        &[
            ParamSpec::id("attributeId", "Parent attribute ID"),
            ParamSpec::id("termId", "Term ID"),
            ParamSpec::field("force", "force", "boolean", "Bypass trash and delete permanently"),
        ],
        "attribute_terms",
    ),
];
