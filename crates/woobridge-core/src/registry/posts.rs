//! WordPress post operations (`wp/v2` posts collection).
//!
//! Post meta lives in a flat `meta` map and is only exposed in the
//! `edit` context; removal is expressed by writing `null`.

use super::descriptor::{Family, MethodDescriptor, ParamSpec};

pub(super) const DESCRIPTORS: &[MethodDescriptor] = &[
    MethodDescriptor::create(
        "create_post",
        "Creates a new WordPress post",
        Family::Content,
        "posts",
        &[ParamSpec::payload(
            "postData",
            "Post fields, e.g. title, content, status",
        )],
        "posts",
    ),
    MethodDescriptor::list(
        "get_posts",
        "Lists WordPress posts",
        Family::Content,
        "posts",
        &[],
    ),
    MethodDescriptor::update(
        "update_post",
        "Updates an existing post",
        Family::Content,
        "posts/{postId}",
        &[
            ParamSpec::id("postId", "Post ID"),
            ParamSpec::payload("postData", "Post fields to change"),
        ],
        "posts",
    ),
    MethodDescriptor::meta_read(
        "get_post_meta",
        "Reads a post's meta fields",
        Family::Content,
        "posts/{postId}",
        &[
            ParamSpec::id("postId", "Post ID"),
            ParamSpec::META_KEY_FILTER,
        ],
    ),
    MethodDescriptor::meta_upsert(
        "create_post_meta",
        "Sets a meta field on a post",
        Family::Content,
        "posts/{postId}",
        &[
            ParamSpec::id("postId", "Post ID"),
            ParamSpec::META_KEY,
            ParamSpec::META_VALUE,
        ],
        "posts",
    ),
    MethodDescriptor::meta_upsert(
        "update_post_meta",
        "Updates a meta field on a post",
        Family::Content,
        "posts/{postId}",
        &[
            ParamSpec::id("postId", "Post ID"),
            ParamSpec::META_KEY,
            ParamSpec::META_VALUE,
        ],
        "posts",
    ),
    MethodDescriptor::meta_remove(
        "delete_post_meta",
        "Removes a meta field from a post",
        Family::Content,
        "posts/{postId}",
        &[ParamSpec::id("postId", "Post ID"), ParamSpec::META_KEY],
        "posts",
    ),
];
