//! The shipped fhEVM example set.
//!
//! Each entry expects `<examples_source>/<id>/<contract_file>` and
//! `<examples_source>/<id>/<test_file>` to exist; a missing file only produces
//! a warning at generation time.

use super::{CategoryDescriptor, Difficulty, ExampleDescriptor};

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Built-in examples, in the order they are listed and documented.
pub fn examples() -> Vec<ExampleDescriptor> {
    vec![
        // -------------------------------------------------------
        // Basics
        // -------------------------------------------------------
        ExampleDescriptor {
            id: "encrypted-counter".into(),
            title: "Encrypted Counter".into(),
            description: "A counter whose value is stored and updated as an encrypted integer."
                .into(),
            concept: "Encrypted state lives on-chain as a handle to a ciphertext. Every update \
                produces a new handle, and the contract must grant itself access to the new \
                value before it can be reused in a later transaction."
                .into(),
            learning_objectives: list(&[
                "Declare and store an euint32 state variable",
                "Accept an encrypted increment from a user",
                "Grant the contract and the caller access to the updated value",
                "Decrypt the counter from a test with the user decryption helper",
            ]),
            features: list(&[
                "euint32",
                "externalEuint32",
                "FHE.fromExternal",
                "FHE.add",
                "FHE.sub",
                "FHE.allowThis",
                "FHE.allow",
            ]),
            chapter: "basic".into(),
            difficulty: Difficulty::Beginner,
            contract_file: "FHECounter.sol".into(),
            test_file: "FHECounter.ts".into(),
            use_case: "A starting point for any contract that keeps a private running total, \
                such as hidden scores, private tallies, or confidential usage meters."
                .into(),
        },
        ExampleDescriptor {
            id: "access-control".into(),
            title: "Access Control".into(),
            description: "Manage who may compute on and decrypt encrypted values using the ACL."
                .into(),
            concept: "Every ciphertext handle has an access control list. Contracts must be \
                explicitly allowed to use a handle, users must be allowed to decrypt it, and \
                transient permissions can be granted for the duration of a single transaction."
                .into(),
            learning_objectives: list(&[
                "Grant persistent access with FHE.allow and FHE.allowThis",
                "Grant single-transaction access with FHE.allowTransient",
                "Check permissions with FHE.isSenderAllowed",
                "Recognize the errors produced when access is missing",
            ]),
            features: list(&[
                "FHE.allow",
                "FHE.allowThis",
                "FHE.allowTransient",
                "FHE.isSenderAllowed",
                "FHE.isAllowed",
            ]),
            chapter: "basic".into(),
            difficulty: Difficulty::Beginner,
            contract_file: "AccessControl.sol".into(),
            test_file: "AccessControl.ts".into(),
            use_case: "Sharing a private balance with an auditor, delegating computation to \
                another contract, or restricting decryption to the owner of a record."
                .into(),
        },
        ExampleDescriptor {
            id: "encrypted-arithmetic".into(),
            title: "Encrypted Arithmetic".into(),
            description: "Add, subtract, multiply, and divide encrypted integers.".into(),
            concept: "Arithmetic on encrypted integers is performed by the coprocessor on \
                ciphertexts. Operations wrap on overflow, and division or remainder are only \
                supported with a plaintext divisor."
                .into(),
            learning_objectives: list(&[
                "Combine encrypted operands with FHE.add, FHE.sub and FHE.mul",
                "Mix encrypted and plaintext operands",
                "Divide by a plaintext value with FHE.div and FHE.rem",
                "Understand wrapping overflow semantics",
            ]),
            features: list(&[
                "FHE.add",
                "FHE.sub",
                "FHE.mul",
                "FHE.div",
                "FHE.rem",
                "FHE.neg",
            ]),
            chapter: "basic".into(),
            difficulty: Difficulty::Beginner,
            contract_file: "EncryptedArithmetic.sol".into(),
            test_file: "EncryptedArithmetic.ts".into(),
            use_case: "Private balances, hidden price calculations, and any computation where \
                the operands must stay confidential."
                .into(),
        },
        ExampleDescriptor {
            id: "encrypted-comparison".into(),
            title: "Encrypted Comparison".into(),
            description: "Compare encrypted values and branch without revealing the result."
                .into(),
            concept: "Comparisons return an encrypted boolean. Because the result cannot drive \
                control flow, branching is replaced by FHE.select, which picks one of two \
                encrypted values based on an encrypted condition."
                .into(),
            learning_objectives: list(&[
                "Compare values with FHE.eq, FHE.ne, FHE.lt, FHE.le, FHE.gt and FHE.ge",
                "Replace if/else with FHE.select",
                "Compute FHE.min and FHE.max",
                "Store encrypted booleans as ebool",
            ]),
            features: list(&[
                "ebool",
                "FHE.eq",
                "FHE.ne",
                "FHE.lt",
                "FHE.gt",
                "FHE.select",
                "FHE.min",
                "FHE.max",
            ]),
            chapter: "basic".into(),
            difficulty: Difficulty::Beginner,
            contract_file: "EncryptedComparison.sol".into(),
            test_file: "EncryptedComparison.ts".into(),
            use_case: "Sealed-bid comparisons, private threshold checks, and capping transfers \
                at a hidden balance."
                .into(),
        },
        // -------------------------------------------------------
        // Inputs and decryption
        // -------------------------------------------------------
        ExampleDescriptor {
            id: "input-proofs".into(),
            title: "Encrypted Inputs and Proofs".into(),
            description: "Submit client-side encrypted values together with a zero-knowledge input proof."
                .into(),
            concept: "Users encrypt inputs off-chain with the relayer SDK. The resulting \
                handles are bound to a contract and a sender by an input proof, which the \
                contract verifies when converting the external handle with FHE.fromExternal."
                .into(),
            learning_objectives: list(&[
                "Create encrypted inputs in a test with createEncryptedInput",
                "Pass several encrypted values under a single proof",
                "Convert external handles with FHE.fromExternal",
                "Understand why a proof is bound to contract and sender",
            ]),
            features: list(&[
                "externalEuint64",
                "externalEbool",
                "FHE.fromExternal",
                "createEncryptedInput",
            ]),
            chapter: "inputs".into(),
            difficulty: Difficulty::Intermediate,
            contract_file: "InputProofs.sol".into(),
            test_file: "InputProofs.ts".into(),
            use_case: "Any flow where a user submits a private value, such as a bid, a vote, or \
                a transfer amount."
                .into(),
        },
        ExampleDescriptor {
            id: "user-decryption".into(),
            title: "User Decryption".into(),
            description: "Let a user privately decrypt a value the contract has shared with them."
                .into(),
            concept: "User decryption re-encrypts a ciphertext under a key held by the user. \
                The user signs an EIP-712 request, and only handles for which they hold ACL \
                permission can be decrypted."
                .into(),
            learning_objectives: list(&[
                "Grant a user decryption rights with FHE.allow",
                "Build and sign an EIP-712 user decryption request",
                "Decrypt single and multiple handles in a test",
            ]),
            features: list(&["FHE.allow", "userDecryptEuint", "EIP-712 signatures"]),
            chapter: "decryption".into(),
            difficulty: Difficulty::Intermediate,
            contract_file: "UserDecryption.sol".into(),
            test_file: "UserDecryption.ts".into(),
            use_case: "Showing a user their own private balance or result without revealing it \
                to anyone else."
                .into(),
        },
        ExampleDescriptor {
            id: "public-decryption".into(),
            title: "Public Decryption".into(),
            description: "Reveal an encrypted result to everyone once a condition is met.".into(),
            concept: "A contract marks a handle as publicly decryptable. The clear value and a \
                decryption proof are then submitted back on-chain, where the proof is checked \
                before the result is trusted."
                .into(),
            learning_objectives: list(&[
                "Mark handles with FHE.makePubliclyDecryptable",
                "Request a public decryption from the off-chain client",
                "Verify decryption proofs with FHE.checkSignatures",
            ]),
            features: list(&[
                "FHE.makePubliclyDecryptable",
                "FHE.checkSignatures",
                "publicDecrypt",
            ]),
            chapter: "decryption".into(),
            difficulty: Difficulty::Intermediate,
            contract_file: "PublicDecryption.sol".into(),
            test_file: "PublicDecryption.ts".into(),
            use_case: "Announcing an auction winner, publishing a final vote tally, or revealing \
                a lottery draw."
                .into(),
        },
        // -------------------------------------------------------
        // Tokens and DeFi
        // -------------------------------------------------------
        ExampleDescriptor {
            id: "confidential-erc20".into(),
            title: "Confidential ERC20".into(),
            description: "A fungible token with encrypted balances and transfer amounts.".into(),
            concept: "Balances are encrypted integers. A transfer never reverts on insufficient \
                funds, because that would leak information; instead it moves either the \
                requested amount or zero, chosen with FHE.select."
                .into(),
            learning_objectives: list(&[
                "Store balances in a mapping of euint64",
                "Implement a transfer that does not leak success or failure",
                "Handle encrypted allowances",
                "Grant balance owners decryption rights after every update",
            ]),
            features: list(&[
                "euint64",
                "FHE.le",
                "FHE.select",
                "FHE.add",
                "FHE.sub",
                "FHE.allow",
            ]),
            chapter: "tokens".into(),
            difficulty: Difficulty::Intermediate,
            contract_file: "ConfidentialERC20.sol".into(),
            test_file: "ConfidentialERC20.ts".into(),
            use_case: "Payroll, private treasury management, and any token where holdings \
                should not be public."
                .into(),
        },
        ExampleDescriptor {
            id: "confidential-lending".into(),
            title: "Confidential Lending".into(),
            description: "Deposit collateral and borrow against it with encrypted positions."
                .into(),
            concept: "Collateral and debt are encrypted. Borrow limits are enforced with \
                encrypted comparisons, so a borrower's position and health stay private while \
                the protocol still refuses under-collateralized loans."
                .into(),
            learning_objectives: list(&[
                "Track encrypted collateral and debt per account",
                "Enforce a collateral ratio with encrypted arithmetic",
                "Cap a borrow at the allowed amount with FHE.select",
                "Repay and withdraw without revealing positions",
            ]),
            features: list(&[
                "euint64",
                "FHE.mul",
                "FHE.div",
                "FHE.le",
                "FHE.select",
                "FHE.allowThis",
            ]),
            chapter: "tokens".into(),
            difficulty: Difficulty::Advanced,
            contract_file: "ConfidentialLending.sol".into(),
            test_file: "ConfidentialLending.ts".into(),
            use_case: "Lending markets where positions could otherwise be targeted for \
                liquidation or copied by other traders."
                .into(),
        },
        // -------------------------------------------------------
        // Applications
        // -------------------------------------------------------
        ExampleDescriptor {
            id: "blind-auction".into(),
            title: "Blind Auction".into(),
            description: "A sealed-bid auction where bids stay encrypted until the winner is revealed."
                .into(),
            concept: "Each bid is compared against the encrypted highest bid as it arrives. \
                The running maximum and the current leader are updated with FHE.select, and \
                only the final winner is publicly decrypted once bidding closes."
                .into(),
            learning_objectives: list(&[
                "Track an encrypted highest bid and an encrypted winner",
                "Update state with FHE.select instead of branching",
                "Close the auction and reveal the winner with public decryption",
                "Refund losing bidders without revealing their bids",
            ]),
            features: list(&[
                "euint64",
                "eaddress",
                "FHE.gt",
                "FHE.select",
                "FHE.makePubliclyDecryptable",
            ]),
            chapter: "applications".into(),
            difficulty: Difficulty::Advanced,
            contract_file: "BlindAuction.sol".into(),
            test_file: "BlindAuction.ts".into(),
            use_case: "NFT and token sales, procurement, and any auction where early bids \
                should not influence later bidders."
                .into(),
        },
        ExampleDescriptor {
            id: "confidential-voting".into(),
            title: "Confidential Voting".into(),
            description: "Cast encrypted votes and publish only the final tally.".into(),
            concept: "Each vote is an encrypted boolean added to encrypted counters. No \
                intermediate tally is ever decrypted, so voters cannot be influenced by a \
                running result."
                .into(),
            learning_objectives: list(&[
                "Accept encrypted ballots from registered voters",
                "Accumulate tallies with FHE.select and FHE.add",
                "Prevent double voting with plaintext bookkeeping",
                "Reveal the final tally after the deadline",
            ]),
            features: list(&[
                "ebool",
                "euint32",
                "FHE.select",
                "FHE.add",
                "FHE.makePubliclyDecryptable",
            ]),
            chapter: "applications".into(),
            difficulty: Difficulty::Intermediate,
            contract_file: "ConfidentialVoting.sol".into(),
            test_file: "ConfidentialVoting.ts".into(),
            use_case: "DAO governance, board elections, and polls where votes must remain \
                secret."
                .into(),
        },
        ExampleDescriptor {
            id: "encrypted-lottery".into(),
            title: "Encrypted Lottery".into(),
            description: "Draw a winner using on-chain encrypted randomness.".into(),
            concept: "FHE.randEuint generates random values that nobody, including validators, \
                can see before they are decrypted. The draw is therefore fixed before anyone \
                can learn it."
                .into(),
            learning_objectives: list(&[
                "Generate encrypted random numbers with FHE.randEuint32",
                "Bound random values to a range",
                "Reveal the draw with public decryption",
            ]),
            features: list(&[
                "FHE.randEuint32",
                "FHE.randEuint64",
                "FHE.rem",
                "FHE.makePubliclyDecryptable",
            ]),
            chapter: "applications".into(),
            difficulty: Difficulty::Advanced,
            contract_file: "EncryptedLottery.sol".into(),
            test_file: "EncryptedLottery.ts".into(),
            use_case: "Lotteries, random trait assignment, and fair selection of participants."
                .into(),
        },
    ]
}

/// Built-in categories, in the order they are listed and documented.
pub fn categories() -> Vec<CategoryDescriptor> {
    vec![
        CategoryDescriptor {
            id: "basics".into(),
            title: "FHEVM Basics".into(),
            description: "Core building blocks: access control, arithmetic, and comparison on \
                encrypted values."
                .into(),
            overview: "These examples introduce the operations every confidential contract \
                relies on. Start here if you have never written an fhEVM contract."
                .into(),
            difficulty: "Beginner".into(),
            examples: list(&[
                "access-control",
                "encrypted-arithmetic",
                "encrypted-comparison",
            ]),
        },
        CategoryDescriptor {
            id: "decryption".into(),
            title: "Inputs and Decryption".into(),
            description: "Getting encrypted data into a contract and getting results back out."
                .into(),
            overview: "Encrypted inputs with proofs, user decryption for private reads, and \
                public decryption for revealing final results."
                .into(),
            difficulty: "Intermediate".into(),
            examples: list(&["input-proofs", "user-decryption", "public-decryption"]),
        },
        CategoryDescriptor {
            id: "defi".into(),
            title: "Confidential DeFi".into(),
            description: "Tokens, lending, and auctions with private balances and bids.".into(),
            overview: "Complete protocols that combine encrypted state, non-leaking transfers, \
                and public decryption of final outcomes."
                .into(),
            difficulty: "Intermediate to Advanced".into(),
            examples: list(&["confidential-erc20", "confidential-lending", "blind-auction"]),
        },
        CategoryDescriptor {
            id: "full-tour".into(),
            title: "Full Tour".into(),
            description: "One example from every chapter, from a first counter to randomness."
                .into(),
            overview: "A guided path through the whole library. Each example builds on concepts \
                introduced by the one before it."
                .into(),
            difficulty: "Mixed".into(),
            examples: list(&[
                "encrypted-counter",
                "access-control",
                "input-proofs",
                "confidential-erc20",
                "confidential-voting",
                "encrypted-lottery",
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_example_has_sources_and_text() {
        for e in examples() {
            assert!(!e.title.is_empty(), "{} has no title", e.id);
            assert!(!e.learning_objectives.is_empty(), "{} has no objectives", e.id);
            assert!(e.contract_file.ends_with(".sol"), "{}", e.id);
            assert!(e.test_file.ends_with(".ts"), "{}", e.id);
        }
    }

    #[test]
    fn test_categories_cover_all_readme_branches() {
        let labels: Vec<_> = categories().into_iter().map(|c| c.difficulty).collect();
        assert!(labels.iter().any(|l| l == "Beginner"));
        assert!(labels.iter().any(|l| l == "Mixed"));
        assert!(labels.iter().any(|l| l != "Beginner" && l != "Mixed"));
    }
}
