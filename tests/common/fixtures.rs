//! Static event corpora used across harnesses.
//!
//! Each corpus is newline-delimited JSON in the exact shape `ReplaySource`
//! reads, so the same lines exercise both the decode boundary and the
//! pipeline behind it.

/// A representative slice of firehose traffic: two valid posts, a like, a
/// repost, a deletion, and a follow. Exactly the two `app.bsky.feed.post`
/// creations should survive normalization.
pub const CORPUS_MIXED: &str = concat!(
    r#"{"action":"create","repo":"did:plc:ewvi7nxzyoun6zhxrhs64oiz","path":"app.bsky.feed.post/3kpost1","record":{"text":"first post","createdAt":"2024-11-02T09:15:00.000Z"}}"#,
    "\n",
    r#"{"action":"create","repo":"did:plc:ewvi7nxzyoun6zhxrhs64oiz","path":"app.bsky.feed.like/3klike1","record":{"createdAt":"2024-11-02T09:15:01.000Z"}}"#,
    "\n",
    r#"{"action":"create","repo":"did:plc:44ybard66vv44zksje25o7dz","path":"app.bsky.feed.repost/3krepost1","record":{"createdAt":"2024-11-02T09:15:02.000Z"}}"#,
    "\n",
    r#"{"action":"delete","repo":"did:plc:ewvi7nxzyoun6zhxrhs64oiz","path":"app.bsky.feed.post/3kpost1"}"#,
    "\n",
    r#"{"action":"create","repo":"did:plc:44ybard66vv44zksje25o7dz","path":"app.bsky.graph.follow/3kfollow1","record":{"createdAt":"2024-11-02T09:15:03.000Z"}}"#,
    "\n",
    r#"{"action":"create","repo":"did:plc:44ybard66vv44zksje25o7dz","path":"app.bsky.feed.post/3kpost2","record":{"text":"second post","createdAt":"2024-11-02T09:15:04.000Z","embed":{"$type":"app.bsky.embed.images","images":[{"alt":"a cat"}]}}}"#,
    "\n",
);

/// Number of post-creation events in [`CORPUS_MIXED`].
pub const CORPUS_MIXED_POSTS: u64 = 2;

/// A corpus with one undecodable line sandwiched between two valid posts.
/// The bad line must be skipped, not kill the stream.
pub const CORPUS_WITH_GARBAGE: &str = concat!(
    r#"{"action":"create","repo":"did:plc:ewvi7nxzyoun6zhxrhs64oiz","path":"app.bsky.feed.post/3ka","record":{"text":"before","createdAt":"2024-11-02T09:00:00.000Z"}}"#,
    "\n",
    "%% not json %%\n",
    r#"{"action":"create","repo":"did:plc:ewvi7nxzyoun6zhxrhs64oiz","path":"app.bsky.feed.post/3kb","record":{"text":"after","createdAt":"2024-11-02T09:00:01.000Z"}}"#,
    "\n",
);

/// Generate `n` distinct post-creation events as NDJSON for volume tests.
pub fn corpus_posts(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                r#"{{"action":"create","repo":"did:plc:ewvi7nxzyoun6zhxrhs64oiz","path":"app.bsky.feed.post/3k{i:08}","record":{{"text":"post {i}","createdAt":"2024-11-02T09:15:00.000Z"}}}}"#
            ) + "\n"
        })
        .collect()
}
